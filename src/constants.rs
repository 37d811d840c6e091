//! Engine-wide constants.
//!
//! This module defines constants used throughout the engine, including
//! the grid floor size and the default breakpoint tiers.

/// Minimum column count reported for an empty canvas, so the editing
/// surface still renders a usable grid.
pub const MIN_GRID_COLS: u16 = 2;

/// Minimum row count reported for an empty canvas.
pub const MIN_GRID_ROWS: u16 = 2;

/// Default column count for a freshly created breakpoint.
pub const DEFAULT_GRID_COLS: u16 = 12;

/// Default row count for a freshly created breakpoint.
pub const DEFAULT_GRID_ROWS: u16 = 8;

/// Maximum length of a component or page name.
pub const MAX_NAME_LEN: usize = 100;
