//! Core domain types for the Kinship relationship graph.
//!
//! These are the structured results handed back to callers; rendering them
//! as text or JSON is left to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Relationship labels ───────────────────────────────────────────

/// Default label of an edge pointing from a child to one of its parents.
pub const HAS_PARENT: &str = "hasParent";

/// Default label of an edge pointing from a parent to one of its children.
pub const HAS_CHILD: &str = "hasChild";

/// The two edge labels the family queries interpret.
///
/// Every other label is opaque: it is stored and followed by the shortest
/// path search, but ignored by orphans, siblings, descendants and cousins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipLabels {
    pub parent: String,
    pub child: String,
}

impl Default for RelationshipLabels {
    fn default() -> Self {
        Self {
            parent: HAS_PARENT.to_string(),
            child: HAS_CHILD.to_string(),
        }
    }
}

impl RelationshipLabels {
    pub fn is_parent(&self, label: &str) -> bool {
        label == self.parent
    }

    pub fn is_child(&self, label: &str) -> bool {
        label == self.child
    }
}

// ── Shortest path ─────────────────────────────────────────────────

/// One traversed edge of a relationship path.
///
/// Displays as `"<from> <label> <to>"`, e.g. `"D hasParent B"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathStep {
    pub from: String,
    pub label: String,
    pub to: String,
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.label, self.to)
    }
}

// ── Descendants ───────────────────────────────────────────────────

/// Generation name for a child edge followed at `depth` (0-based).
///
/// 0 → "child", 1 → "grandchild", 2 → "great grandchild", and one more
/// "great " per extra generation.
pub fn generation_label(depth: usize) -> String {
    match depth {
        0 => "child".to_string(),
        d => format!("{}grandchild", "great ".repeat(d - 1)),
    }
}

/// A single line of a descendant listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Descendant {
    /// Generation name: "child", "grandchild", "great grandchild", ...
    pub generation: String,
    pub name: String,
    /// Depth of the node whose child edge produced this entry (0 for direct children).
    pub depth: usize,
}

/// How a descendant walk terminated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalkStatus {
    Complete,
    /// A "hasChild" cycle was reached. Entries emitted before the cycle are kept.
    CycleDetected,
}

/// Ordered descendant entries plus the terminal status of the walk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescendantListing {
    pub root: String,
    pub entries: Vec<Descendant>,
    pub status: WalkStatus,
}

impl DescendantListing {
    pub fn is_cyclic(&self) -> bool {
        self.status == WalkStatus::CycleDetected
    }
}

// ── Statistics ────────────────────────────────────────────────────

/// Statistics about the in-memory graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub orphan_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_labels() {
        assert_eq!(generation_label(0), "child");
        assert_eq!(generation_label(1), "grandchild");
        assert_eq!(generation_label(2), "great grandchild");
        assert_eq!(generation_label(3), "great great grandchild");
    }

    #[test]
    fn test_path_step_display() {
        let step = PathStep {
            from: "D".to_string(),
            label: "hasParent".to_string(),
            to: "B".to_string(),
        };
        assert_eq!(step.to_string(), "D hasParent B");
    }

    #[test]
    fn test_default_labels() {
        let labels = RelationshipLabels::default();
        assert!(labels.is_parent("hasParent"));
        assert!(labels.is_child("hasChild"));
        assert!(!labels.is_parent("hasChild"));
    }

    #[test]
    fn test_walk_status_serialization() {
        let json = serde_json::to_string(&WalkStatus::CycleDetected).unwrap();
        assert_eq!(json, "\"cycle_detected\"");
    }
}
