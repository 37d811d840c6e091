//! Page schema root and referential integrity checks.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, MAX_NAME_LEN};
use crate::models::{Breakpoint, CanvasRect, Component, ComponentLink, LayoutConfig};

/// Page-level metadata.
///
/// # Validation
///
/// - `name` must be non-empty, max 100 characters
/// - `created` must be <= `modified`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page name (e.g., "Marketing landing")
    pub name: String,
    /// Long description
    pub description: String,
    /// Creator name
    pub author: String,
    /// Creation timestamp (ISO 8601)
    pub created: DateTime<Utc>,
    /// Last modification timestamp (ISO 8601)
    pub modified: DateTime<Utc>,
    /// Searchable keywords
    pub tags: Vec<String>,
    /// Schema version (e.g., "1.0")
    pub version: String,
}

impl PageMetadata {
    /// Creates new metadata with default values.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            name,
            description: String::new(),
            author: String::new(),
            created: now,
            modified: now,
            tags: Vec::new(),
            version: "1.0".to_string(),
        })
    }

    /// Validates metadata name.
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("Page name cannot be empty");
        }

        if name.len() > MAX_NAME_LEN {
            anyhow::bail!(
                "Page name '{}' exceeds maximum length of {} characters (got {})",
                name,
                MAX_NAME_LEN,
                name.len()
            );
        }

        Ok(())
    }

    /// Updates the modification timestamp to now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::new("Untitled Page").unwrap()
    }
}

/// A dangling reference found by [`Schema::validate_references`].
///
/// Any of these must block downstream description generation entirely; a
/// schema with dangling ids must never be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceError {
    /// A layout membership list names a component that no longer exists
    UnknownMember {
        /// Breakpoint whose layout holds the id
        breakpoint: String,
        /// The dangling component id
        component_id: String,
    },
    /// A role slot names a component outside the layout's membership
    RoleNotMember {
        /// Breakpoint whose layout holds the role
        breakpoint: String,
        /// Role slot name ("header", "sidebar", "main", "footer")
        role: String,
        /// The offending component id
        component_id: String,
    },
    /// A link endpoint names a component that no longer exists
    UnknownLinkEndpoint {
        /// The dangling component id
        component_id: String,
    },
    /// A breakpoint has no layout entry
    MissingLayout {
        /// The breakpoint name
        breakpoint: String,
    },
    /// A layout entry names a breakpoint that no longer exists
    OrphanLayout {
        /// The dangling breakpoint name
        breakpoint: String,
    },
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMember {
                breakpoint,
                component_id,
            } => write!(
                f,
                "Layout for '{breakpoint}' references unknown component '{component_id}'"
            ),
            Self::RoleNotMember {
                breakpoint,
                role,
                component_id,
            } => write!(
                f,
                "Role '{role}' at '{breakpoint}' references component '{component_id}' that is not a member"
            ),
            Self::UnknownLinkEndpoint { component_id } => {
                write!(f, "Link references unknown component '{component_id}'")
            }
            Self::MissingLayout { breakpoint } => {
                write!(f, "Breakpoint '{breakpoint}' has no layout entry")
            }
            Self::OrphanLayout { breakpoint } => {
                write!(f, "Layout entry for unknown breakpoint '{breakpoint}'")
            }
        }
    }
}

/// The complete page layout schema.
///
/// The schema is an immutable value from the engine's point of view: the
/// owning store applies mutations through the methods here and replaces
/// its copy atomically.
///
/// # Validation
///
/// - At least one breakpoint required; deleting the last one is forbidden
/// - `layouts` has exactly one entry per breakpoint; both are mutated
///   together, never independently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Page metadata
    #[serde(default)]
    pub metadata: PageMetadata,
    /// All components on the page
    pub components: Vec<Component>,
    /// Viewport breakpoints, not necessarily sorted
    pub breakpoints: Vec<Breakpoint>,
    /// Per-breakpoint layout configuration, keyed by breakpoint name
    pub layouts: HashMap<String, LayoutConfig>,
    /// Cross-breakpoint component links
    #[serde(default)]
    pub links: Vec<ComponentLink>,
}

impl Schema {
    /// Creates an empty schema with a single breakpoint.
    pub fn new(name: impl Into<String>, initial: Breakpoint) -> Result<Self> {
        let metadata = PageMetadata::new(name)?;
        let mut layouts = HashMap::new();
        layouts.insert(initial.name.clone(), LayoutConfig::default());

        Ok(Self {
            metadata,
            components: Vec::new(),
            breakpoints: vec![initial],
            layouts,
            links: Vec::new(),
        })
    }

    /// Creates an empty schema with the conventional mobile/tablet/desktop
    /// tiers.
    pub fn with_default_breakpoints(name: impl Into<String>) -> Result<Self> {
        let mut schema = Self::new(name, Breakpoint::new("mobile", 0, 4, 8)?)?;
        schema.add_breakpoint(Breakpoint::new("tablet", 768, 8, 8)?, LayoutConfig::default())?;
        schema.add_breakpoint(
            Breakpoint::new("desktop", 1024, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS)?,
            LayoutConfig::default(),
        )?;
        Ok(schema)
    }

    /// Gets a component by id.
    #[must_use]
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Gets a mutable reference to a component by id.
    pub fn component_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Gets a breakpoint by name.
    #[must_use]
    pub fn breakpoint(&self, name: &str) -> Option<&Breakpoint> {
        self.breakpoints.iter().find(|b| b.name == name)
    }

    /// Gets the layout configuration for a breakpoint.
    #[must_use]
    pub fn layout_for(&self, breakpoint_name: &str) -> Option<&LayoutConfig> {
        self.layouts.get(breakpoint_name)
    }

    /// Breakpoints in inheritance order: ascending `min_width`, name as
    /// tie-breaker so the order is deterministic.
    #[must_use]
    pub fn breakpoints_sorted(&self) -> Vec<&Breakpoint> {
        let mut sorted: Vec<&Breakpoint> = self.breakpoints.iter().collect();
        sorted.sort_by(|a, b| {
            a.min_width
                .cmp(&b.min_width)
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }

    /// Adds a breakpoint together with its layout entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a breakpoint with the same name already exists.
    pub fn add_breakpoint(&mut self, breakpoint: Breakpoint, layout: LayoutConfig) -> Result<()> {
        if self.breakpoint(&breakpoint.name).is_some() {
            anyhow::bail!("Breakpoint '{}' already exists", breakpoint.name);
        }

        self.layouts.insert(breakpoint.name.clone(), layout);
        self.breakpoints.push(breakpoint);
        self.metadata.touch();
        Ok(())
    }

    /// Removes a breakpoint, its layout entry, and every per-breakpoint
    /// map entry keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the breakpoint does not exist or is the last
    /// remaining one.
    pub fn remove_breakpoint(&mut self, name: &str) -> Result<Breakpoint> {
        let Some(index) = self.breakpoints.iter().position(|b| b.name == name) else {
            anyhow::bail!("Breakpoint '{}' does not exist", name);
        };

        if self.breakpoints.len() == 1 {
            anyhow::bail!("Cannot delete the last remaining breakpoint");
        }

        let removed = self.breakpoints.remove(index);
        self.layouts.remove(name);
        for component in &mut self.components {
            component.placements.remove(name);
            component.responsive_overrides.remove(name);
        }
        self.metadata.touch();
        Ok(removed)
    }

    /// Adds a component and registers it as a member of the given
    /// breakpoint's layout.
    ///
    /// Components are always inserted at the currently active breakpoint;
    /// other breakpoints pick the component up through normalization.
    ///
    /// # Errors
    ///
    /// Returns an error if the breakpoint is unknown or the component id
    /// is already taken.
    pub fn add_component(&mut self, component: Component, breakpoint_name: &str) -> Result<()> {
        if self.component(&component.id).is_some() {
            anyhow::bail!("Component with id '{}' already exists", component.id);
        }

        let Some(layout) = self.layouts.get_mut(breakpoint_name) else {
            anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
        };

        layout.ensure_member(&component.id);
        self.components.push(component);
        self.metadata.touch();
        Ok(())
    }

    /// Removes a component, purging it from every layout membership list,
    /// every role slot, and every link.
    pub fn remove_component(&mut self, id: &str) -> Option<Component> {
        let index = self.components.iter().position(|c| c.id == id)?;
        let removed = self.components.remove(index);

        for layout in self.layouts.values_mut() {
            layout.remove_member(id);
        }
        self.links.retain(|link| !link.touches(id));
        self.metadata.touch();
        Some(removed)
    }

    /// Writes an explicit placement for a component at a breakpoint.
    ///
    /// This is the commit step after a `try_place` acceptance; the caller
    /// should re-run the normalizer afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the component or breakpoint is unknown.
    pub fn set_placement(
        &mut self,
        component_id: &str,
        breakpoint_name: &str,
        rect: CanvasRect,
    ) -> Result<()> {
        if self.breakpoint(breakpoint_name).is_none() {
            anyhow::bail!("Breakpoint '{}' does not exist", breakpoint_name);
        }

        let Some(component) = self.component_mut(component_id) else {
            anyhow::bail!("Component '{}' does not exist", component_id);
        };

        component
            .placements
            .insert(breakpoint_name.to_string(), rect);
        self.metadata.touch();
        Ok(())
    }

    /// Checks every cross-entity reference in the schema.
    ///
    /// This is the hard gate before layout or prompt consumers read the
    /// schema: an empty result means every membership id, role id, link
    /// endpoint, and layout entry resolves.
    #[must_use]
    pub fn validate_references(&self) -> Vec<ReferenceError> {
        let mut errors = Vec::new();

        for breakpoint in &self.breakpoints {
            if !self.layouts.contains_key(&breakpoint.name) {
                errors.push(ReferenceError::MissingLayout {
                    breakpoint: breakpoint.name.clone(),
                });
            }
        }

        for (name, layout) in &self.layouts {
            if self.breakpoint(name).is_none() {
                errors.push(ReferenceError::OrphanLayout {
                    breakpoint: name.clone(),
                });
            }

            for id in &layout.components {
                if self.component(id).is_none() {
                    errors.push(ReferenceError::UnknownMember {
                        breakpoint: name.clone(),
                        component_id: id.clone(),
                    });
                }
            }

            for (role, id) in layout.roles.assigned() {
                if !layout.is_member(id) {
                    errors.push(ReferenceError::RoleNotMember {
                        breakpoint: name.clone(),
                        role: role.to_string(),
                        component_id: id.to_string(),
                    });
                }
            }
        }

        for link in &self.links {
            for endpoint in [&link.a, &link.b] {
                if self.component(endpoint).is_none() {
                    errors.push(ReferenceError::UnknownLinkEndpoint {
                        component_id: endpoint.clone(),
                    });
                }
            }
        }

        errors
    }
}
