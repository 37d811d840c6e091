//! Viewport breakpoint definitions.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::GridSize;

/// A named viewport tier with its own addressable grid.
///
/// Breakpoints are totally ordered by `min_width` ascending; that order
/// defines "earlier/later" for placement inheritance.
///
/// # Validation
///
/// - `name` must be non-empty and unique within the schema
/// - `grid_cols` and `grid_rows` must be >= 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Unique breakpoint name (e.g., "mobile", "desktop")
    pub name: String,
    /// Minimum viewport width in pixels at which this tier applies
    pub min_width: u32,
    /// Addressable column count (>= 1)
    pub grid_cols: u16,
    /// Addressable row count (>= 1)
    pub grid_rows: u16,
}

impl Breakpoint {
    /// Creates a new `Breakpoint` with the given name, minimum width,
    /// and grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or either grid dimension
    /// is zero.
    pub fn new(
        name: impl Into<String>,
        min_width: u32,
        grid_cols: u16,
        grid_rows: u16,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            anyhow::bail!("Breakpoint name cannot be empty");
        }
        if grid_cols == 0 || grid_rows == 0 {
            anyhow::bail!(
                "Breakpoint '{}' grid must be at least 1x1 (got {}x{})",
                name,
                grid_cols,
                grid_rows
            );
        }

        Ok(Self {
            name,
            min_width,
            grid_cols,
            grid_rows,
        })
    }

    /// The addressable grid for this breakpoint.
    #[must_use]
    pub const fn grid(&self) -> GridSize {
        GridSize::new(self.grid_cols, self.grid_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_new_valid() {
        let bp = Breakpoint::new("mobile", 0, 4, 8).unwrap();
        assert_eq!(bp.name, "mobile");
        assert_eq!(bp.min_width, 0);
        assert_eq!(bp.grid(), GridSize::new(4, 8));
    }

    #[test]
    fn test_breakpoint_new_invalid() {
        assert!(Breakpoint::new("", 0, 4, 8).is_err());
        assert!(Breakpoint::new("mobile", 0, 0, 8).is_err());
        assert!(Breakpoint::new("mobile", 0, 4, 0).is_err());
    }
}
