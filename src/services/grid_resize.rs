//! Grid shrink constraint checking.
//!
//! Shrinking a breakpoint's grid must never clip an occupant. The
//! calculator bounds the occupants' effective rectangles and compares the
//! proposed size against that minimum; growing is always safe.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{minimum_bounds, CanvasRect, GridSize, Schema};
use crate::services::normalizer::effective_placement;

/// A component that a proposed shrink would clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedComponent {
    /// The clipped component's id
    pub component_id: String,
    /// Its effective rectangle at the breakpoint
    pub rect: CanvasRect,
}

/// Advisory verdict for a proposed grid resize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeVerdict {
    /// The new size holds every occupant
    Safe,
    /// The new size would clip occupants
    Unsafe {
        /// Smallest grid that still holds every occupant
        min_required: GridSize,
        /// Every component whose rectangle would no longer fit
        affected: Vec<AffectedComponent>,
    },
}

/// How much a breakpoint's grid could shrink without clipping anything.
///
/// Reported by [`suggest_compaction`] so the caller can offer a
/// "shrink to fit" action without committing to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compaction {
    /// Columns that could be removed
    pub reducible_cols: u16,
    /// Rows that could be removed
    pub reducible_rows: u16,
}

/// Effective rectangles of every member at the breakpoint, paired with
/// the owning component id.
fn occupant_rects(schema: &Schema, breakpoint_name: &str) -> Result<Vec<(String, CanvasRect)>> {
    let Some(layout) = schema.layout_for(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
    };

    Ok(layout
        .components
        .iter()
        .filter_map(|id| {
            let component = schema.component(id)?;
            let rect = effective_placement(schema, breakpoint_name, component)?;
            Some((id.clone(), rect))
        })
        .collect())
}

/// Decides whether the breakpoint's grid can be resized to
/// `new_cols x new_rows` without clipping any occupant.
///
/// # Errors
///
/// Returns an error if the breakpoint does not exist.
pub fn can_resize(
    schema: &Schema,
    breakpoint_name: &str,
    new_cols: u16,
    new_rows: u16,
) -> Result<ResizeVerdict> {
    let occupants = occupant_rects(schema, breakpoint_name)?;
    let rects: Vec<CanvasRect> = occupants.iter().map(|(_, rect)| *rect).collect();
    let min_required = minimum_bounds(&rects);

    if new_cols >= min_required.cols && new_rows >= min_required.rows {
        return Ok(ResizeVerdict::Safe);
    }

    let proposed = GridSize::new(new_cols, new_rows);
    let affected: Vec<AffectedComponent> = occupants
        .into_iter()
        .filter(|(_, rect)| !proposed.contains(rect))
        .map(|(component_id, rect)| AffectedComponent { component_id, rect })
        .collect();

    debug!(
        breakpoint = %breakpoint_name,
        "resize to {}x{} unsafe, {} occupant(s) clipped",
        new_cols,
        new_rows,
        affected.len()
    );

    Ok(ResizeVerdict::Unsafe {
        min_required,
        affected,
    })
}

/// Reports how many columns and rows the breakpoint's grid could shed
/// while still holding every occupant, saturating at zero.
///
/// # Errors
///
/// Returns an error if the breakpoint does not exist.
pub fn suggest_compaction(schema: &Schema, breakpoint_name: &str) -> Result<Compaction> {
    let Some(breakpoint) = schema.breakpoint(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
    };

    let occupants = occupant_rects(schema, breakpoint_name)?;
    let rects: Vec<CanvasRect> = occupants.iter().map(|(_, rect)| *rect).collect();
    let min_required = minimum_bounds(&rects);

    Ok(Compaction {
        reducible_cols: breakpoint.grid_cols.saturating_sub(min_required.cols),
        reducible_rows: breakpoint.grid_rows.saturating_sub(min_required.rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, SemanticRole};

    /// Desktop 12x8 grid with occupants bounding to exactly 12x8.
    fn full_desktop_schema() -> (Schema, String, String) {
        let mut schema = Schema::with_default_breakpoints("Test Page").unwrap();
        let wide = Component::new("Wide", SemanticRole::Hero)
            .unwrap()
            .with_placement("desktop", CanvasRect::new(8, 0, 4, 2));
        let tall = Component::new("Tall", SemanticRole::Sidebar)
            .unwrap()
            .with_placement("desktop", CanvasRect::new(0, 4, 2, 4));
        let (wide_id, tall_id) = (wide.id.clone(), tall.id.clone());
        schema.add_component(wide, "desktop").unwrap();
        schema.add_component(tall, "desktop").unwrap();
        (schema, wide_id, tall_id)
    }

    #[test]
    fn test_can_resize_growing_is_safe() {
        let (schema, _, _) = full_desktop_schema();
        assert_eq!(
            can_resize(&schema, "desktop", 16, 10).unwrap(),
            ResizeVerdict::Safe
        );
    }

    #[test]
    fn test_can_resize_at_minimum_is_safe() {
        let (schema, _, _) = full_desktop_schema();
        assert_eq!(
            can_resize(&schema, "desktop", 12, 8).unwrap(),
            ResizeVerdict::Safe
        );
    }

    #[test]
    fn test_can_resize_shrink_lists_clipped_occupants() {
        let (schema, wide_id, _) = full_desktop_schema();
        let verdict = can_resize(&schema, "desktop", 10, 8).unwrap();

        let ResizeVerdict::Unsafe {
            min_required,
            affected,
        } = verdict
        else {
            panic!("expected unsafe verdict");
        };
        assert_eq!(min_required, GridSize::new(12, 8));
        // Only the component crossing column 10 is clipped
        assert_eq!(affected.len(), 1);
        assert_eq!(affected[0].component_id, wide_id);
        assert_eq!(affected[0].rect, CanvasRect::new(8, 0, 4, 2));
    }

    #[test]
    fn test_can_resize_row_shrink() {
        let (schema, _, tall_id) = full_desktop_schema();
        let verdict = can_resize(&schema, "desktop", 12, 6).unwrap();

        let ResizeVerdict::Unsafe { affected, .. } = verdict else {
            panic!("expected unsafe verdict");
        };
        assert_eq!(affected.len(), 1);
        assert_eq!(affected[0].component_id, tall_id);
    }

    #[test]
    fn test_can_resize_counts_inherited_occupants() {
        let mut schema = Schema::with_default_breakpoints("Test Page").unwrap();
        // Placed at mobile only; occupies desktop through inheritance
        let comp = Component::new("Nav", SemanticRole::Navigation)
            .unwrap()
            .with_placement("mobile", CanvasRect::new(0, 0, 4, 6));
        schema.add_component(comp, "mobile").unwrap();
        let schema = crate::services::normalizer::normalize(&schema);

        let verdict = can_resize(&schema, "desktop", 12, 4).unwrap();
        assert!(matches!(verdict, ResizeVerdict::Unsafe { .. }));
    }

    #[test]
    fn test_can_resize_empty_breakpoint_floor() {
        let schema = Schema::with_default_breakpoints("Test Page").unwrap();
        // Empty canvas: anything at or above the 2x2 floor is safe
        assert_eq!(
            can_resize(&schema, "desktop", 2, 2).unwrap(),
            ResizeVerdict::Safe
        );
        assert!(matches!(
            can_resize(&schema, "desktop", 1, 1).unwrap(),
            ResizeVerdict::Unsafe { .. }
        ));
    }

    #[test]
    fn test_suggest_compaction() {
        let mut schema = Schema::with_default_breakpoints("Test Page").unwrap();
        let comp = Component::new("Card", SemanticRole::Card)
            .unwrap()
            .with_placement("desktop", CanvasRect::new(0, 0, 6, 3));
        schema.add_component(comp, "desktop").unwrap();

        let compaction = suggest_compaction(&schema, "desktop").unwrap();
        assert_eq!(compaction.reducible_cols, 6);
        assert_eq!(compaction.reducible_rows, 5);
    }

    #[test]
    fn test_suggest_compaction_saturates_at_zero() {
        let mut schema = Schema::with_default_breakpoints("Test Page").unwrap();
        // Mobile grid is 4x8; occupant spans all of it
        let comp = Component::new("Hero", SemanticRole::Hero)
            .unwrap()
            .with_placement("mobile", CanvasRect::new(0, 0, 4, 8));
        schema.add_component(comp, "mobile").unwrap();

        let compaction = suggest_compaction(&schema, "mobile").unwrap();
        assert_eq!(compaction.reducible_cols, 0);
        assert_eq!(compaction.reducible_rows, 0);
    }

    #[test]
    fn test_unknown_breakpoint_is_error() {
        let schema = Schema::with_default_breakpoints("Test Page").unwrap();
        assert!(can_resize(&schema, "widescreen", 12, 8).is_err());
        assert!(suggest_compaction(&schema, "widescreen").is_err());
    }
}
