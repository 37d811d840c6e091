//! Breakpoint inheritance normalization.
//!
//! A breakpoint that was never explicitly edited must still show every
//! component somewhere deterministic. The normalizer walks breakpoints in
//! ascending `min_width` order and, for each component, either keeps its
//! explicit placement, copies the nearest earlier breakpoint's placement
//! (clamped to the target grid), or leaves the component absent. Absence
//! is a valid terminal state, not an error.
//!
//! `normalize` is total on structurally valid schemas and idempotent:
//! running it twice yields the same schema as running it once.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::models::{Breakpoint, CanvasRect, Component, Schema};

/// Recomputes every component's per-breakpoint placement and membership.
///
/// For each component and each breakpoint in ascending `min_width` order:
///
/// 1. An explicit placement is kept unchanged, and the component's
///    membership at that breakpoint is ensured (appended at the end if
///    newly inserted).
/// 2. Otherwise the nearest earlier breakpoint where the component has a
///    placement and membership donates its rectangle, clamped to the
///    target grid. Clamping is silent best effort, never an error.
/// 3. With no earlier donor the component stays absent at that breakpoint.
///
/// Placement and override entries keyed by breakpoint names that no
/// longer exist are dropped, so re-normalizing after a breakpoint
/// deletion leaves no dangling per-breakpoint data.
#[must_use]
pub fn normalize(schema: &Schema) -> Schema {
    let mut out = schema.clone();

    let order: Vec<Breakpoint> = out.breakpoints_sorted().into_iter().cloned().collect();
    let known_names: HashSet<&str> = order.iter().map(|b| b.name.as_str()).collect();

    // Purge per-breakpoint entries for deleted breakpoints
    for component in &mut out.components {
        component
            .placements
            .retain(|name, _| known_names.contains(name.as_str()));
        component
            .responsive_overrides
            .retain(|name, _| known_names.contains(name.as_str()));
    }

    let component_ids: Vec<String> = out.components.iter().map(|c| c.id.clone()).collect();

    for (index, breakpoint) in order.iter().enumerate() {
        for id in &component_ids {
            let Some(component) = out.component(id) else {
                continue;
            };

            if component.placements.contains_key(&breakpoint.name) {
                if let Some(layout) = out.layouts.get_mut(&breakpoint.name) {
                    layout.ensure_member(id);
                }
                continue;
            }

            let Some(inherited) = inherit_from_earlier(&out, &order[..index], component) else {
                trace!(component = %id, breakpoint = %breakpoint.name, "no donor, component stays absent");
                continue;
            };

            let clamped = inherited.clamped_to(breakpoint.grid());
            if clamped != inherited {
                debug!(
                    component = %id,
                    breakpoint = %breakpoint.name,
                    "inherited placement clamped to {}x{} grid",
                    breakpoint.grid_cols,
                    breakpoint.grid_rows
                );
            }

            if let Some(component) = out.component_mut(id) {
                component.placements.insert(breakpoint.name.clone(), clamped);
            }
            if let Some(layout) = out.layouts.get_mut(&breakpoint.name) {
                layout.ensure_member(id);
            }
        }
    }

    out
}

/// Nearest earlier breakpoint's placement for a component, if the
/// component both has a placement there and is a member of that
/// breakpoint's layout.
///
/// Earlier breakpoints have already been processed when this runs, so
/// their placements include anything they themselves inherited.
fn inherit_from_earlier(
    schema: &Schema,
    earlier: &[Breakpoint],
    component: &Component,
) -> Option<CanvasRect> {
    earlier.iter().rev().find_map(|breakpoint| {
        let rect = component.placements.get(&breakpoint.name)?;
        let layout = schema.layout_for(&breakpoint.name)?;
        layout.is_member(&component.id).then_some(*rect)
    })
}

/// Resolves a component's effective rectangle at a breakpoint: its
/// explicit placement if present, otherwise the inherited rectangle the
/// cascade would produce.
///
/// On a normalized schema this is just a map lookup; on an un-normalized
/// schema it replays the cascade tier by tier, clamping at every
/// intermediate grid, so the preview always equals what [`normalize`]
/// would store. A rectangle squeezed through a narrow middle tier stays
/// squeezed on a wider later tier. Returns `None` when the breakpoint is
/// unknown or the component is absent at every tier at or below the
/// target.
#[must_use]
pub fn effective_placement(
    schema: &Schema,
    breakpoint_name: &str,
    component: &Component,
) -> Option<CanvasRect> {
    let order = schema.breakpoints_sorted();
    let index = order.iter().position(|b| b.name == breakpoint_name)?;

    let mut carried: Option<CanvasRect> = None;
    for breakpoint in &order[..=index] {
        carried = match component.placements.get(&breakpoint.name) {
            Some(rect) => Some(*rect),
            None => carried.map(|rect| rect.clamped_to(breakpoint.grid())),
        };
    }
    carried
}
