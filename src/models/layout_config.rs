//! Per-breakpoint layout configuration.

use serde::{Deserialize, Serialize};

/// Overall page structure for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStructure {
    /// Sections stacked top to bottom
    #[default]
    Vertical,
    /// Sections side by side
    Horizontal,
    /// Sidebar next to a main column
    SidebarMain,
    /// No prescribed structure
    Custom,
}

/// Named structural roles assigned to member components.
///
/// Every assigned id must also appear in the owning layout's membership
/// list; `Schema::validate_references` enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleAssignments {
    /// Page header component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Sidebar component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
    /// Main content component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// Page footer component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl RoleAssignments {
    /// Iterates over `(role name, component id)` pairs that are assigned.
    pub fn assigned(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("header", self.header.as_deref()),
            ("sidebar", self.sidebar.as_deref()),
            ("main", self.main.as_deref()),
            ("footer", self.footer.as_deref()),
        ]
        .into_iter()
        .filter_map(|(role, id)| id.map(|id| (role, id)))
    }

    /// Clears every role slot that references the given component.
    pub fn purge(&mut self, component_id: &str) {
        for slot in [
            &mut self.header,
            &mut self.sidebar,
            &mut self.main,
            &mut self.footer,
        ] {
            if slot.as_deref() == Some(component_id) {
                *slot = None;
            }
        }
    }
}

/// Membership and document order for one breakpoint.
///
/// # Validation
///
/// - Every id in `components` must reference an existing component
/// - Every id in `roles` must also appear in `components`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Overall structure at this breakpoint
    #[serde(default)]
    pub structure: LayoutStructure,
    /// Component ids in document order
    #[serde(default)]
    pub components: Vec<String>,
    /// Structural role assignments
    #[serde(default, skip_serializing_if = "RoleAssignments::is_default")]
    pub roles: RoleAssignments,
}

impl RoleAssignments {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(LayoutStructure::Vertical)
    }
}

impl LayoutConfig {
    /// Creates an empty `LayoutConfig` with the given structure.
    #[must_use]
    pub const fn new(structure: LayoutStructure) -> Self {
        Self {
            structure,
            components: Vec::new(),
            roles: RoleAssignments {
                header: None,
                sidebar: None,
                main: None,
                footer: None,
            },
        }
    }

    /// Returns true if the component is a member at this breakpoint.
    #[must_use]
    pub fn is_member(&self, component_id: &str) -> bool {
        self.components.iter().any(|id| id == component_id)
    }

    /// Appends the component id if not already a member, preserving the
    /// existing relative order.
    pub fn ensure_member(&mut self, component_id: &str) {
        if !self.is_member(component_id) {
            self.components.push(component_id.to_string());
        }
    }

    /// Removes the component from membership and from any role slot.
    pub fn remove_member(&mut self, component_id: &str) {
        self.components.retain(|id| id != component_id);
        self.roles.purge(component_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_member_appends_once() {
        let mut layout = LayoutConfig::new(LayoutStructure::Vertical);
        layout.ensure_member("a");
        layout.ensure_member("b");
        layout.ensure_member("a");

        assert_eq!(layout.components, vec!["a", "b"]);
    }

    #[test]
    fn test_remove_member_purges_roles() {
        let mut layout = LayoutConfig::new(LayoutStructure::SidebarMain);
        layout.ensure_member("nav");
        layout.ensure_member("body");
        layout.roles.sidebar = Some("nav".to_string());
        layout.roles.main = Some("body".to_string());

        layout.remove_member("nav");

        assert_eq!(layout.components, vec!["body"]);
        assert_eq!(layout.roles.sidebar, None);
        assert_eq!(layout.roles.main, Some("body".to_string()));
    }

    #[test]
    fn test_roles_assigned_iterator() {
        let mut roles = RoleAssignments::default();
        roles.header = Some("h".to_string());
        roles.footer = Some("f".to_string());

        let assigned: Vec<_> = roles.assigned().collect();
        assert_eq!(assigned, vec![("header", "h"), ("footer", "f")]);
    }
}
