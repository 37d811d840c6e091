//! Spatial relationship summaries for the description generator.
//!
//! The prompt/export builder reads effective rectangles to describe how
//! components relate on the grid. Only the spatial analysis lives here;
//! the natural-language templates around it are external. Generation is
//! hard-gated on referential integrity: a schema with dangling ids must
//! never be exported.

use anyhow::Result;

use crate::models::{CanvasRect, Schema};
use crate::services::normalizer::effective_placement;

/// One component's resolved geometry at a breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedComponent {
    /// Component id
    pub id: String,
    /// Component name
    pub name: String,
    /// Effective rectangle at the breakpoint
    pub rect: CanvasRect,
}

/// Resolves every visible member of the breakpoint to its effective
/// rectangle, in document order.
///
/// Components hidden by a responsive override are skipped; so are members
/// with no effective placement (absent at every tier at or below).
///
/// # Errors
///
/// Returns an error if the breakpoint is unknown or the schema fails
/// [`Schema::validate_references`].
pub fn placed_components(schema: &Schema, breakpoint_name: &str) -> Result<Vec<PlacedComponent>> {
    let errors = schema.validate_references();
    if let Some(first) = errors.first() {
        anyhow::bail!(
            "Schema has {} dangling reference(s), refusing to describe: {}",
            errors.len(),
            first
        );
    }

    let Some(layout) = schema.layout_for(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
    };

    Ok(layout
        .components
        .iter()
        .filter_map(|id| {
            let component = schema.component(id)?;
            if component.is_hidden_at(breakpoint_name) {
                return None;
            }
            let rect = effective_placement(schema, breakpoint_name, component)?;
            Some(PlacedComponent {
                id: id.clone(),
                name: component.name.clone(),
                rect,
            })
        })
        .collect())
}

/// Plain-text spatial relationship statements for one breakpoint.
///
/// Reports full-row spans and pairwise left-of/above relations between
/// non-overlapping occupants, in document order.
///
/// # Errors
///
/// Same gates as [`placed_components`].
pub fn spatial_summary(schema: &Schema, breakpoint_name: &str) -> Result<Vec<String>> {
    let Some(breakpoint) = schema.breakpoint(breakpoint_name) else {
        anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
    };
    let placed = placed_components(schema, breakpoint_name)?;

    let mut statements = Vec::new();
    for item in &placed {
        if item.rect.width == breakpoint.grid_cols {
            statements.push(format!("{} spans the full row", item.name));
        }
    }

    for (i, left) in placed.iter().enumerate() {
        for right in &placed[i + 1..] {
            if let Some(statement) = relation(left, right) {
                statements.push(statement);
            }
        }
    }

    Ok(statements)
}

/// Pairwise relation between two placed components, if one is clearly
/// left of or above the other.
fn relation(a: &PlacedComponent, b: &PlacedComponent) -> Option<String> {
    if a.rect.right() <= u32::from(b.rect.x) {
        Some(format!("{} sits left of {}", a.name, b.name))
    } else if b.rect.right() <= u32::from(a.rect.x) {
        Some(format!("{} sits left of {}", b.name, a.name))
    } else if a.rect.bottom() <= u32::from(b.rect.y) {
        Some(format!("{} sits above {}", a.name, b.name))
    } else if b.rect.bottom() <= u32::from(a.rect.y) {
        Some(format!("{} sits above {}", b.name, a.name))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, ResponsiveOverride, SemanticRole};

    fn sample_schema() -> Schema {
        let mut schema = Schema::with_default_breakpoints("Test Page").unwrap();
        let header = Component::new("Header", SemanticRole::Header)
            .unwrap()
            .with_placement("desktop", CanvasRect::new(0, 0, 12, 1));
        let sidebar = Component::new("Sidebar", SemanticRole::Sidebar)
            .unwrap()
            .with_placement("desktop", CanvasRect::new(0, 1, 3, 6));
        let main = Component::new("Main", SemanticRole::Content)
            .unwrap()
            .with_placement("desktop", CanvasRect::new(3, 1, 9, 6));
        schema.add_component(header, "desktop").unwrap();
        schema.add_component(sidebar, "desktop").unwrap();
        schema.add_component(main, "desktop").unwrap();
        schema
    }

    #[test]
    fn test_spatial_summary_relations() {
        let schema = sample_schema();
        let statements = spatial_summary(&schema, "desktop").unwrap();

        assert!(statements.contains(&"Header spans the full row".to_string()));
        assert!(statements.contains(&"Header sits above Sidebar".to_string()));
        assert!(statements.contains(&"Header sits above Main".to_string()));
        assert!(statements.contains(&"Sidebar sits left of Main".to_string()));
    }

    #[test]
    fn test_placed_components_skips_hidden() {
        let mut schema = sample_schema();
        let sidebar_id = schema
            .components
            .iter()
            .find(|c| c.name == "Sidebar")
            .unwrap()
            .id
            .clone();
        schema
            .component_mut(&sidebar_id)
            .unwrap()
            .responsive_overrides
            .insert(
                "desktop".to_string(),
                ResponsiveOverride {
                    hidden: Some(true),
                    ..ResponsiveOverride::default()
                },
            );

        let placed = placed_components(&schema, "desktop").unwrap();
        assert!(placed.iter().all(|p| p.id != sidebar_id));
    }

    #[test]
    fn test_describe_refuses_dangling_references() {
        let mut schema = sample_schema();
        schema
            .layouts
            .get_mut("desktop")
            .unwrap()
            .ensure_member("ghost");

        assert!(placed_components(&schema, "desktop").is_err());
        assert!(spatial_summary(&schema, "desktop").is_err());
    }

    #[test]
    fn test_spatial_summary_unknown_breakpoint() {
        let schema = sample_schema();
        assert!(spatial_summary(&schema, "widescreen").is_err());
    }
}
