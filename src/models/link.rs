//! Cross-breakpoint component links.

use serde::{Deserialize, Serialize};

/// An unordered pair marking two components as the same logical component
/// across breakpoints.
///
/// # Validation
///
/// - Endpoints must differ and reference existing components
/// - A component may appear in at most one stored link at a time; adding
///   a new link drops both endpoints' previous links first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentLink {
    /// First endpoint component id
    pub a: String,
    /// Second endpoint component id
    pub b: String,
}

impl ComponentLink {
    /// Creates a new `ComponentLink`.
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Returns true if this link connects the two ids, in either order.
    #[must_use]
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Returns true if either endpoint is the given id.
    #[must_use]
    pub fn touches(&self, component_id: &str) -> bool {
        self.a == component_id || self.b == component_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connects_is_order_insensitive() {
        let link = ComponentLink::new("c1", "c2");
        assert!(link.connects("c1", "c2"));
        assert!(link.connects("c2", "c1"));
        assert!(!link.connects("c1", "c3"));
    }

    #[test]
    fn test_touches() {
        let link = ComponentLink::new("c1", "c2");
        assert!(link.touches("c1"));
        assert!(link.touches("c2"));
        assert!(!link.touches("c3"));
    }
}
