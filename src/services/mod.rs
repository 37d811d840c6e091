//! Service layer for the layout engine's algorithms.
//!
//! Every service here is a pure function over a complete [`crate::models::Schema`]
//! snapshot: the normalizer returns a replacement schema, the validators
//! return advisory verdicts, and the grouping is rebuilt on demand.

pub mod describe;
pub mod grid_resize;
pub mod link_groups;
pub mod normalizer;
pub mod placement;

// Re-export commonly used types and functions
pub use describe::{placed_components, spatial_summary, PlacedComponent};
pub use grid_resize::{can_resize, suggest_compaction, AffectedComponent, Compaction, ResizeVerdict};
pub use link_groups::{add_link, groups_of, remove_link};
pub use normalizer::{effective_placement, normalize};
pub use placement::{clamp_for_drop, try_place, PlacementRejection, PlacementVerdict};
