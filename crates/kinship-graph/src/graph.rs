//! In-memory relationship graph.
//!
//! Nodes live in an insertion-ordered arena with a name → index map for O(1)
//! lookup. Each node's outgoing edges are kept in a parallel adjacency list
//! and refer to their targets by dense index, never by pointer.

use std::collections::HashMap;
use std::fmt::Write as _;

use kinship_core::types::RelationshipLabels;

/// A named entity in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Dense index (0..N-1), also the insertion position.
    pub index: usize,
    /// Unique name, also the lookup key.
    pub name: String,
}

/// A directed, labeled edge in the adjacency list of its source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    /// Relationship label: "hasParent", "hasChild", or anything else.
    pub label: String,
    /// Target node index in the arena.
    pub target_index: usize,
}

/// The relationship graph: node arena, adjacency lists and the name index.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<GraphNode>,
    /// `adjacency[i]` = outgoing edges of node `i`, in insertion order.
    adjacency: Vec<Vec<GraphEdge>>,
    node_index: HashMap<String, usize>,
    labels: RelationshipLabels,
}

impl GraphStore {
    /// Empty graph interpreting the default "hasParent" / "hasChild" labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph interpreting custom parent/child labels.
    pub fn with_labels(labels: RelationshipLabels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    /// Add a node if no node by that name exists. Returns its index either way.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&index) = self.node_index.get(name) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(GraphNode {
            index,
            name: name.to_string(),
        });
        self.adjacency.push(Vec::new());
        self.node_index.insert(name.to_string(), index);
        index
    }

    /// Append an edge to `from`'s adjacency list, creating either endpoint if needed.
    ///
    /// The reciprocal edge is never inferred.
    pub fn add_edge(&mut self, from: &str, to: &str, label: &str) {
        let from_index = self.add_node(from);
        let target_index = self.add_node(to);
        self.adjacency[from_index].push(GraphEdge {
            label: label.to_string(),
            target_index,
        });
    }

    /// Look up a node by name.
    pub fn get_node(&self, name: &str) -> Option<&GraphNode> {
        self.index_of(name).map(|index| &self.nodes[index])
    }

    /// Look up a node's dense index by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.node_index.get(name).copied()
    }

    /// Name of the node at a dense index.
    pub fn name(&self, index: usize) -> &str {
        &self.nodes[index].name
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn edges(&self, index: usize) -> &[GraphEdge] {
        &self.adjacency[index]
    }

    /// The parent/child labels the family queries interpret.
    pub fn labels(&self) -> &RelationshipLabels {
        &self.labels
    }

    /// Targets of a node's outgoing parent edges, in edge order.
    pub fn parents(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[index]
            .iter()
            .filter(|edge| self.labels.is_parent(&edge.label))
            .map(|edge| edge.target_index)
    }

    /// Targets of a node's outgoing child edges, in edge order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[index]
            .iter()
            .filter(|edge| self.labels.is_child(&edge.label))
            .map(|edge| edge.target_index)
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// Text listing of every node followed by its outgoing edges.
    ///
    /// ```text
    /// A
    ///   A hasChild B
    /// B
    ///   B hasParent A
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            let _ = writeln!(out, "{}", node.name);
            for edge in &self.adjacency[node.index] {
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    node.name,
                    edge.label,
                    self.nodes[edge.target_index].name
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = GraphStore::new();
        let first = graph.add_node("Ann");
        let second = graph.add_node("Ann");

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = GraphStore::new();
        graph.add_edge("Ann", "Bob", "hasChild");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_node("Ann").map(|n| n.index), Some(0));
        assert_eq!(graph.get_node("Bob").map(|n| n.index), Some(1));
        // No reciprocal edge.
        assert!(graph.edges(1).is_empty());
    }

    #[test]
    fn test_get_node_absent() {
        let graph = GraphStore::new();
        assert!(graph.get_node("nobody").is_none());
        assert_eq!(graph.index_of("nobody"), None);
    }

    #[test]
    fn test_multigraph_and_self_loop() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", "knows");
        graph.add_edge("A", "B", "knows");
        graph.add_edge("A", "A", "hasChild");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges(0).len(), 3);
        assert_eq!(graph.children(0).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_parents_and_children_follow_labels() {
        let mut graph = GraphStore::new();
        graph.add_edge("Kid", "Mum", "hasParent");
        graph.add_edge("Kid", "Friend", "knows");
        graph.add_edge("Kid", "Dad", "hasParent");
        graph.add_edge("Mum", "Kid", "hasChild");

        let kid = graph.index_of("Kid").unwrap();
        let parents: Vec<&str> = graph.parents(kid).map(|i| graph.name(i)).collect();
        assert_eq!(parents, vec!["Mum", "Dad"]);

        let mum = graph.index_of("Mum").unwrap();
        assert_eq!(graph.children(mum).collect::<Vec<_>>(), vec![kid]);
    }

    #[test]
    fn test_custom_labels() {
        let labels = RelationshipLabels {
            parent: "parent".to_string(),
            child: "child".to_string(),
        };
        let mut graph = GraphStore::with_labels(labels);
        graph.add_edge("Kid", "Mum", "parent");
        graph.add_edge("Kid", "Dad", "hasParent");

        assert_eq!(graph.parents(0).count(), 1);
    }

    #[test]
    fn test_dump_lists_nodes_and_edges() {
        let mut graph = GraphStore::new();
        graph.add_edge("A", "B", "hasChild");
        graph.add_edge("B", "A", "hasParent");
        graph.add_node("C");

        assert_eq!(
            graph.dump(),
            "A\n  A hasChild B\nB\n  B hasParent A\nC\n"
        );
    }
}
