//! Data models for the canvas schema.
//!
//! This module contains all the core data structures used throughout the
//! engine. Models carry structural invariants only; the placement,
//! inheritance, and grouping algorithms live in [`crate::services`].

pub mod breakpoint;
pub mod component;
pub mod grid;
pub mod layout_config;
pub mod link;
pub mod schema;

// Re-export all model types
pub use breakpoint::Breakpoint;
pub use component::{
    Component, InternalLayout, PositioningStrategy, ResponsiveOverride, SemanticRole,
};
pub use grid::{minimum_bounds, CanvasRect, GridSize};
pub use layout_config::{LayoutConfig, LayoutStructure, RoleAssignments};
pub use link::ComponentLink;
pub use schema::{PageMetadata, ReferenceError, Schema};
