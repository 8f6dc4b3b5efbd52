//! Shortest relationship path ("bingo") by breadth-first search.

use std::collections::{HashMap, VecDeque};

use crate::graph::GraphStore;
use crate::state::TraversalState;

/// A raw path through the in-memory graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPath {
    /// Node indices along the path, source first.
    pub node_indices: Vec<usize>,
    /// Edges along the path as (from_node_index, edge_position_in_adjacency_list).
    pub edges: Vec<(usize, usize)>,
}

/// Fewest-edges path from `source` to `target`, following every edge regardless of label.
///
/// The search stops as soon as `target` is discovered. Returns `None` when
/// `target` is unreachable, including when `target == source`, since the
/// source is never discovered by its own search.
pub fn shortest_path(graph: &GraphStore, source: usize, target: usize) -> Option<RawPath> {
    let mut state = TraversalState::new(graph.node_count());
    let mut prev: HashMap<usize, usize> = HashMap::new();
    let mut queue = VecDeque::new();

    state.mark_visited(source);
    queue.push_back(source);

    let mut found = false;
    'search: while let Some(node) = queue.pop_front() {
        for edge in graph.edges(node) {
            if !state.mark_visited(edge.target_index) {
                continue;
            }
            prev.insert(edge.target_index, node);
            if edge.target_index == target {
                found = true;
                break 'search;
            }
            queue.push_back(edge.target_index);
        }
    }

    if !found {
        tracing::debug!(
            source = graph.name(source),
            target = graph.name(target),
            "No path found"
        );
        return None;
    }

    // Reconstruct path.
    let mut node_indices = vec![target];
    let mut current = target;
    while let Some(&parent) = prev.get(&current) {
        node_indices.push(parent);
        current = parent;
    }
    node_indices.reverse();

    // First edge joining each consecutive pair; one always exists.
    let edges = node_indices
        .windows(2)
        .filter_map(|pair| {
            graph
                .edges(pair[0])
                .iter()
                .position(|edge| edge.target_index == pair[1])
                .map(|pos| (pair[0], pos))
        })
        .collect();

    Some(RawPath {
        node_indices,
        edges,
    })
}
