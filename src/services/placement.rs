//! Spatial placement validation.
//!
//! `try_place` is the single pre-condition gate behind moves, resizes, and
//! insert-at-drop: it checks a proposed rectangle against the breakpoint's
//! grid bounds and against every other occupant's effective rectangle. It
//! never mutates the schema; on acceptance the caller writes the rectangle
//! through `Schema::set_placement` and re-runs the normalizer.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CanvasRect, GridSize, Schema};
use crate::services::normalizer::effective_placement;

/// Why a proposed placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementRejection {
    /// The rectangle exceeds the breakpoint's addressable grid
    OutOfBounds {
        /// The grid the rectangle must fit
        grid: GridSize,
    },
    /// The rectangle overlaps an existing occupant
    Collision {
        /// Id of the occupant already holding the space
        with_id: String,
    },
}

/// Advisory verdict for a proposed move, resize, or insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementVerdict {
    /// The rectangle fits and collides with nothing
    Accepted,
    /// The rectangle must not be committed
    Rejected(PlacementRejection),
}

impl PlacementVerdict {
    /// Returns true if the proposal was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Validates placing `proposed` for the given component at the given
/// breakpoint.
///
/// Membership comes from the breakpoint's layout; each other member's
/// rectangle is its effective (explicit-or-inherited) placement. The
/// component being placed is excluded from the collision scan so a move
/// never collides with its own old position.
///
/// # Errors
///
/// Returns an error if the breakpoint or component does not exist; those
/// indicate a caller bug, not an in-domain rejection.
pub fn try_place(
    schema: &Schema,
    breakpoint_name: &str,
    component_id: &str,
    proposed: CanvasRect,
) -> Result<PlacementVerdict> {
    let Some(breakpoint) = schema.breakpoint(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
    };
    if schema.component(component_id).is_none() {
        anyhow::bail!("Component '{}' does not exist", component_id);
    }

    let grid = breakpoint.grid();
    if !grid.contains(&proposed) {
        debug!(
            component = %component_id,
            breakpoint = %breakpoint_name,
            "placement rejected: out of {}x{} bounds",
            grid.cols,
            grid.rows
        );
        return Ok(PlacementVerdict::Rejected(PlacementRejection::OutOfBounds {
            grid,
        }));
    }

    let Some(layout) = schema.layout_for(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' has no layout entry", breakpoint_name);
    };

    for other_id in &layout.components {
        if other_id == component_id {
            continue;
        }
        let Some(other) = schema.component(other_id) else {
            continue;
        };
        let Some(rect) = effective_placement(schema, breakpoint_name, other) else {
            continue;
        };
        if proposed.overlaps(&rect) {
            debug!(
                component = %component_id,
                breakpoint = %breakpoint_name,
                occupant = %other_id,
                "placement rejected: collision"
            );
            return Ok(PlacementVerdict::Rejected(PlacementRejection::Collision {
                with_id: other_id.clone(),
            }));
        }
    }

    Ok(PlacementVerdict::Accepted)
}

/// Clamps a drop rectangle into the breakpoint's grid before validation,
/// so drops near an edge degrade to a valid in-bounds rectangle instead
/// of being rejected outright.
///
/// # Errors
///
/// Returns an error if the breakpoint does not exist.
pub fn clamp_for_drop(
    schema: &Schema,
    breakpoint_name: &str,
    desired: CanvasRect,
) -> Result<CanvasRect> {
    let Some(breakpoint) = schema.breakpoint(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
    };
    Ok(desired.clamped_to(breakpoint.grid()))
}
