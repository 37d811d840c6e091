//! Responsive Canvas Layout Engine
//!
//! This library keeps a multi-breakpoint, grid-addressed page layout
//! internally consistent while it is edited: components never overlap,
//! never leave the addressable grid, grids never shrink below their
//! occupants, and breakpoints without explicit data inherit deterministically
//! from the nearest lower breakpoint.
//!
//! The engine is pure: every operation takes a complete [`models::Schema`]
//! snapshot and either returns an advisory verdict or a replacement schema.
//! Rendering, input handling, persistence, and prompt generation live in
//! external collaborators.

// Module declarations
pub mod constants;
pub mod models;
pub mod services;
