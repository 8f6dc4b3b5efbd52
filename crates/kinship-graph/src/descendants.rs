//! Generation-labeled descendant walk with cycle detection.
//!
//! Depth-first over child edges using an explicit frame stack, so the
//! emission order is the same as a recursive walk but depth is bounded by
//! heap rather than the call stack.

use kinship_core::types::{generation_label, Descendant, WalkStatus};

use crate::graph::GraphStore;
use crate::state::TraversalState;

/// One level of the descent line.
struct Frame {
    node: usize,
    /// Position in the adjacency list to resume scanning from.
    next_edge: usize,
    depth: usize,
}

/// Walk every descendant of `root` along child edges.
///
/// Each child edge emits an entry before it is followed. Reaching a node that
/// was already visited in this walk counts as a cycle, whether it closes a
/// loop or joins two lines of descent: the walk stops there and keeps what
/// it already emitted.
pub fn walk_descendants(graph: &GraphStore, root: usize) -> (Vec<Descendant>, WalkStatus) {
    let labels = graph.labels();
    let mut state = TraversalState::new(graph.node_count());
    let mut entries = Vec::new();

    state.mark_visited(root);
    let mut stack = vec![Frame {
        node: root,
        next_edge: 0,
        depth: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let depth = frame.depth;
        let edges = graph.edges(node);

        let next = edges[frame.next_edge..]
            .iter()
            .position(|edge| labels.is_child(&edge.label))
            .map(|offset| frame.next_edge + offset);

        let Some(edge_pos) = next else {
            stack.pop();
            continue;
        };
        frame.next_edge = edge_pos + 1;

        let child = edges[edge_pos].target_index;
        entries.push(Descendant {
            generation: generation_label(depth),
            name: graph.name(child).to_string(),
            depth,
        });

        if !state.mark_visited(child) {
            tracing::debug!(
                root = graph.name(root),
                node = graph.name(child),
                "Cycle found in child edges"
            );
            return (entries, WalkStatus::CycleDetected);
        }
        stack.push(Frame {
            node: child,
            next_edge: 0,
            depth: depth + 1,
        });
    }

    (entries, WalkStatus::Complete)
}
