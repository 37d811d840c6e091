//! Cross-breakpoint link editing and grouping.
//!
//! Links are pairwise edges; "the same logical component across
//! breakpoints" is their transitive closure, computed on demand with a
//! disjoint-set. Groups are never persisted: the edge list is the only
//! source of truth.
//!
//! Link edits come from best-effort UI gestures, so invalid input (self
//! link, unknown endpoint, duplicate pair) is a silent no-op rather than
//! an error.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::models::{ComponentLink, Schema};

/// Adds a link between two components, enforcing the one-link-per-
/// component cap.
///
/// Before inserting the new pair, any existing link touching `a` and any
/// touching `b` are dropped. This is deliberate: a component that gains a
/// new partner silently loses its previous one, so a chain like
/// `{c1,c2}` then `add(c2,c3)` leaves only `{c2,c3}`.
///
/// No-ops (returning the input unchanged) when `a == b`, when either id
/// is unknown, or when the pair already exists.
#[must_use]
pub fn add_link(schema: &Schema, a: &str, b: &str) -> Vec<ComponentLink> {
    let links = &schema.links;
    if a == b || schema.component(a).is_none() || schema.component(b).is_none() {
        debug!(a = %a, b = %b, "link add ignored: self link or unknown endpoint");
        return links.clone();
    }
    if links.iter().any(|link| link.connects(a, b)) {
        return links.clone();
    }

    let mut next: Vec<ComponentLink> = links
        .iter()
        .filter(|link| !link.touches(a) && !link.touches(b))
        .cloned()
        .collect();
    next.push(ComponentLink::new(a, b));
    next
}

/// Removes the unordered pair `{a, b}` if present.
#[must_use]
pub fn remove_link(links: &[ComponentLink], a: &str, b: &str) -> Vec<ComponentLink> {
    links
        .iter()
        .filter(|link| !link.connects(a, b))
        .cloned()
        .collect()
}

/// Computes the transitive link group for every component id.
///
/// Every id maps to the full connected set it belongs to; components
/// without links map to a singleton set of themselves. Link endpoints not
/// present in `all_ids` are ignored.
#[must_use]
pub fn groups_of(
    all_ids: &[String],
    links: &[ComponentLink],
) -> HashMap<String, BTreeSet<String>> {
    let mut sets = DisjointSet::new(all_ids.len());
    let index: HashMap<&str, usize> = all_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    for link in links {
        if let (Some(&a), Some(&b)) = (index.get(link.a.as_str()), index.get(link.b.as_str())) {
            sets.union(a, b);
        }
    }

    let mut by_root: HashMap<usize, BTreeSet<String>> = HashMap::new();
    for (i, id) in all_ids.iter().enumerate() {
        by_root.entry(sets.find(i)).or_default().insert(id.clone());
    }

    all_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), by_root[&sets.find(i)].clone()))
        .collect()
}

/// Disjoint-set with path compression and union by rank, rebuilt on
/// demand from the current edge list.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // Path halving
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Component, SemanticRole};

    fn schema_with_components(names: &[&str]) -> (Schema, Vec<String>) {
        let mut schema = Schema::with_default_breakpoints("Test Page").unwrap();
        let mut ids = Vec::new();
        for name in names {
            let comp = Component::new(*name, SemanticRole::Content).unwrap();
            ids.push(comp.id.clone());
            schema.add_component(comp, "mobile").unwrap();
        }
        (schema, ids)
    }

    #[test]
    fn test_add_link_basic() {
        let (schema, ids) = schema_with_components(&["c1", "c2"]);
        let links = add_link(&schema, &ids[0], &ids[1]);
        assert_eq!(links.len(), 1);
        assert!(links[0].connects(&ids[0], &ids[1]));
    }

    #[test]
    fn test_add_link_rejects_self_and_unknown() {
        let (schema, ids) = schema_with_components(&["c1"]);
        assert!(add_link(&schema, &ids[0], &ids[0]).is_empty());
        assert!(add_link(&schema, &ids[0], "ghost").is_empty());
        assert!(add_link(&schema, "ghost", &ids[0]).is_empty());
    }

    #[test]
    fn test_add_link_duplicate_pair_is_noop() {
        let (mut schema, ids) = schema_with_components(&["c1", "c2"]);
        schema.links = add_link(&schema, &ids[0], &ids[1]);
        // Same pair in reversed order
        let links = add_link(&schema, &ids[1], &ids[0]);
        assert_eq!(links, schema.links);
    }

    #[test]
    fn test_add_link_replaces_prior_links() {
        let (mut schema, ids) = schema_with_components(&["c1", "c2", "c3"]);
        schema.links = add_link(&schema, &ids[0], &ids[1]);

        // c2 gains a new partner; its link to c1 is dropped
        let links = add_link(&schema, &ids[1], &ids[2]);
        assert_eq!(links.len(), 1);
        assert!(links[0].connects(&ids[1], &ids[2]));
    }

    #[test]
    fn test_remove_link_unordered() {
        let (mut schema, ids) = schema_with_components(&["c1", "c2"]);
        schema.links = add_link(&schema, &ids[0], &ids[1]);

        let links = remove_link(&schema.links, &ids[1], &ids[0]);
        assert!(links.is_empty());

        // Removing an absent pair is a no-op
        let links = remove_link(&schema.links, &ids[0], "ghost");
        assert_eq!(links, schema.links);
    }

    #[test]
    fn test_groups_of_singletons_without_links() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let groups = groups_of(&ids, &[]);

        assert_eq!(groups["a"], BTreeSet::from(["a".to_string()]));
        assert_eq!(groups["b"], BTreeSet::from(["b".to_string()]));
    }

    #[test]
    fn test_groups_of_transitive_closure() {
        let ids: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        // A transient chain: a-b and b-c coexisting groups all three
        let links = vec![ComponentLink::new("a", "b"), ComponentLink::new("b", "c")];
        let groups = groups_of(&ids, &links);

        let expected: BTreeSet<String> =
            ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(groups["a"], expected);
        assert_eq!(groups["b"], expected);
        assert_eq!(groups["c"], expected);
        assert_eq!(groups["d"], BTreeSet::from(["d".to_string()]));
    }

    #[test]
    fn test_replace_on_add_limits_groups() {
        // The documented behavior from the editing flow: {c1,c2} then
        // add(c2,c3) replaces c2's link, leaving c1 as a singleton.
        let (mut schema, ids) = schema_with_components(&["c1", "c2", "c3"]);
        schema.links = add_link(&schema, &ids[0], &ids[1]);
        schema.links = add_link(&schema, &ids[1], &ids[2]);

        let groups = groups_of(&ids, &schema.links);
        let pair: BTreeSet<String> = [&ids[1], &ids[2]].iter().map(|s| (*s).clone()).collect();
        assert_eq!(groups[&ids[1]], pair);
        assert_eq!(groups[&ids[2]], pair);
        assert_eq!(groups[&ids[0]], BTreeSet::from([ids[0].clone()]));
    }

    #[test]
    fn test_groups_ignore_unknown_endpoints() {
        let ids = vec!["a".to_string()];
        let links = vec![ComponentLink::new("a", "ghost")];
        let groups = groups_of(&ids, &links);
        assert_eq!(groups["a"], BTreeSet::from(["a".to_string()]));
    }
}
