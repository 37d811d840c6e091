//! Grid arithmetic over axis-aligned integer rectangles.
//!
//! All spatial reasoning in the engine reduces to these pure functions:
//! containment inside a bounded grid, rectangle overlap, and the minimum
//! grid that still holds a set of rectangles. Coordinates are integer grid
//! cells relative to one breakpoint's `cols x rows` addressable space.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_GRID_COLS, MIN_GRID_ROWS};

/// Addressable grid size for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    /// Column count (>= 1)
    pub cols: u16,
    /// Row count (>= 1)
    pub rows: u16,
}

impl GridSize {
    /// Creates a new `GridSize`.
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Returns true if `rect` lies entirely inside this grid.
    ///
    /// The far edge is inclusive: a rectangle whose right edge equals
    /// `cols` still fits. The comparison is widened so a rectangle near
    /// the top of the `u16` range reads as out of bounds instead of
    /// overflowing.
    #[must_use]
    pub fn contains(&self, rect: &CanvasRect) -> bool {
        rect.right() <= u32::from(self.cols) && rect.bottom() <= u32::from(self.rows)
    }
}

/// Axis-aligned rectangle in grid cells.
///
/// # Validation
///
/// - `width` and `height` must be >= 1
/// - Meaningful only relative to one breakpoint's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasRect {
    /// Leftmost column (0-based)
    pub x: u16,
    /// Topmost row (0-based)
    pub y: u16,
    /// Width in columns (>= 1)
    pub width: u16,
    /// Height in rows (>= 1)
    pub height: u16,
}

impl CanvasRect {
    /// Creates a new `CanvasRect`.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Column one past the right edge.
    ///
    /// Widened to `u32`: `x + width` can exceed `u16::MAX` for
    /// representable rectangles, and the advisory validators must never
    /// panic on hostile input.
    #[must_use]
    pub fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.width)
    }

    /// Row one past the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.height)
    }

    /// Returns true if this rectangle overlaps `other`.
    ///
    /// Rectangles that only share a boundary edge are not overlapping;
    /// edge-adjacency is permitted on the canvas.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        u32::from(self.x) < other.right()
            && self.right() > u32::from(other.x)
            && u32::from(self.y) < other.bottom()
            && self.bottom() > u32::from(other.y)
    }

    /// Clamps this rectangle into `grid`, shrinking first and then
    /// pulling the origin inside.
    ///
    /// Used when an inherited placement lands on a smaller grid and when a
    /// drop near an edge must degrade to a valid in-bounds rectangle.
    /// Never fails; the result always satisfies [`GridSize::contains`].
    #[must_use]
    pub fn clamped_to(&self, grid: GridSize) -> Self {
        let width = self.width.min(grid.cols);
        let height = self.height.min(grid.rows);
        Self {
            x: self.x.min(grid.cols - width),
            y: self.y.min(grid.rows - height),
            width,
            height,
        }
    }
}

/// Smallest grid that contains every given rectangle.
///
/// An empty set yields the floor size so an empty canvas still renders a
/// usable grid.
#[must_use]
pub fn minimum_bounds(rects: &[CanvasRect]) -> GridSize {
    if rects.is_empty() {
        return GridSize::new(MIN_GRID_COLS, MIN_GRID_ROWS);
    }

    let cols = rects.iter().map(CanvasRect::right).max().unwrap_or(0);
    let rows = rects.iter().map(CanvasRect::bottom).max().unwrap_or(0);
    GridSize::new(
        u16::try_from(cols).unwrap_or(u16::MAX),
        u16::try_from(rows).unwrap_or(u16::MAX),
    )
}
