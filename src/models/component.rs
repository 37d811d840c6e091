//! Page component data structures.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_NAME_LEN;
use crate::models::CanvasRect;

/// Semantic role a component plays on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticRole {
    /// Page or section header
    Header,
    /// Navigation bar or menu
    Navigation,
    /// Hero / banner section
    Hero,
    /// General content block
    #[default]
    Content,
    /// Supporting sidebar
    Sidebar,
    /// Card-style content unit
    Card,
    /// Input form
    Form,
    /// Image or video block
    Media,
    /// Page footer
    Footer,
}

/// How the generated code should position the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositioningStrategy {
    /// Addressed by grid coordinates (the canvas default)
    #[default]
    Grid,
    /// Absolutely positioned within its container
    Absolute,
    /// Positioned by normal document flow
    Flow,
}

/// Layout of the component's own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InternalLayout {
    /// Children stacked vertically
    #[default]
    Stack,
    /// Children laid out in a row
    Row,
    /// Children on an internal grid
    Grid,
    /// No prescribed arrangement
    Freeform,
}

/// Per-breakpoint presentation overrides.
///
/// These never affect placement geometry; they are hints consumed by the
/// description generator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponsiveOverride {
    /// Hide the component at this breakpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Override the rendered width (CSS-level, not grid cells)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_override: Option<String>,
    /// Override the document order at this breakpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_override: Option<u16>,
}

/// An independently positioned page component.
///
/// A component's `placements` map need not contain an entry for every
/// breakpoint; missing entries are resolved by the normalizer and are
/// never left ambiguous once normalization has run.
///
/// # Validation
///
/// - `name` must be non-empty, max 100 characters
/// - `placements` keys must name existing breakpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier (stable across renames and moves)
    #[serde(default = "generate_component_id")]
    pub id: String,
    /// Human-readable name (e.g., "Primary nav")
    pub name: String,
    /// Semantic role on the page
    pub semantic_role: SemanticRole,
    /// Positioning strategy for generated code
    #[serde(default)]
    pub positioning_strategy: PositioningStrategy,
    /// Layout of the component's own children
    #[serde(default)]
    pub internal_layout: InternalLayout,
    /// Free-form styling hints (property name to value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<HashMap<String, String>>,
    /// Per-breakpoint presentation overrides, keyed by breakpoint name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub responsive_overrides: HashMap<String, ResponsiveOverride>,
    /// Per-breakpoint explicit placements, keyed by breakpoint name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub placements: HashMap<String, CanvasRect>,
}

/// Generates a new unique component ID
fn generate_component_id() -> String {
    Uuid::new_v4().to_string()
}

impl Component {
    /// Creates a new `Component` with a generated id and the given name
    /// and semantic role.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or exceeds 100 characters.
    pub fn new(name: impl Into<String>, semantic_role: SemanticRole) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(Self {
            id: generate_component_id(),
            name,
            semantic_role,
            positioning_strategy: PositioningStrategy::default(),
            internal_layout: InternalLayout::default(),
            styling: None,
            responsive_overrides: HashMap::new(),
            placements: HashMap::new(),
        })
    }

    /// Validates component name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }

        if name.len() > MAX_NAME_LEN {
            anyhow::bail!(
                "Component name '{}' exceeds maximum length of {} characters (got {})",
                name,
                MAX_NAME_LEN,
                name.len()
            );
        }

        Ok(())
    }

    /// Sets the positioning strategy.
    #[must_use]
    pub const fn with_positioning(mut self, strategy: PositioningStrategy) -> Self {
        self.positioning_strategy = strategy;
        self
    }

    /// Sets the internal layout.
    #[must_use]
    pub const fn with_internal_layout(mut self, layout: InternalLayout) -> Self {
        self.internal_layout = layout;
        self
    }

    /// Sets an explicit placement for the named breakpoint.
    #[must_use]
    pub fn with_placement(mut self, breakpoint: impl Into<String>, rect: CanvasRect) -> Self {
        self.placements.insert(breakpoint.into(), rect);
        self
    }

    /// Sets a presentation override for the named breakpoint.
    #[must_use]
    pub fn with_override(
        mut self,
        breakpoint: impl Into<String>,
        value: ResponsiveOverride,
    ) -> Self {
        self.responsive_overrides.insert(breakpoint.into(), value);
        self
    }

    /// Sets a styling hint.
    #[must_use]
    pub fn with_styling(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styling
            .get_or_insert_with(HashMap::new)
            .insert(property.into(), value.into());
        self
    }

    /// Updates the component name with validation.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        Self::validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// The explicit placement at the named breakpoint, if any.
    #[must_use]
    pub fn placement(&self, breakpoint: &str) -> Option<&CanvasRect> {
        self.placements.get(breakpoint)
    }

    /// Returns true if the component is hidden at the named breakpoint.
    #[must_use]
    pub fn is_hidden_at(&self, breakpoint: &str) -> bool {
        self.responsive_overrides
            .get(breakpoint)
            .and_then(|o| o.hidden)
            .unwrap_or(false)
    }

    /// Creates a copy of this component with a fresh id and the given name.
    ///
    /// Placements and overrides are carried over; the caller is responsible
    /// for finding a non-colliding position before committing the duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the new name fails validation.
    pub fn duplicate_as(&self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let mut copy = self.clone();
        copy.id = generate_component_id();
        copy.name = name;
        Ok(copy)
    }
}
