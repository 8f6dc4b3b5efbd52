//! Single-pass family queries: orphans and siblings.

use std::collections::HashSet;

use crate::graph::GraphStore;

/// Indices of nodes with no outgoing parent edge, in insertion order.
pub fn orphans(graph: &GraphStore) -> Vec<usize> {
    graph
        .nodes()
        .iter()
        .filter(|node| graph.parents(node.index).next().is_none())
        .map(|node| node.index)
        .collect()
}

/// Other children of every parent of `node`, deduplicated in discovery order.
pub fn siblings(graph: &GraphStore, node: usize) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for parent in graph.parents(node) {
        for child in graph.children(parent) {
            if child != node && seen.insert(child) {
                found.push(child);
            }
        }
    }

    found
}
