//! Cousin search: ascend parent edges, then descend child edges.
//!
//! "Number-th cousin, removed-times-removed" is the union of two searches:
//! up `number + 1` then down `number + removed + 1`, and up
//! `number + removed + 1` then down `number + 1`.
//!
//! Every up/down path is enumerated, so work grows with the branching factor
//! raised to the step count. Deduplication happens only at collection time.

use std::collections::HashSet;

use crate::graph::GraphStore;

/// Pending position of the search.
struct Step {
    node: usize,
    up: usize,
    down: usize,
    /// Node the down phase must not re-enter: the one the last ascent came from.
    excluded: usize,
}

/// Indices of the `number`-th cousins of `node`, `removed` times removed, in discovery order.
pub fn find_cousins(graph: &GraphStore, node: usize, number: usize, removed: usize) -> Vec<usize> {
    // No graph is deep enough for a step count past usize::MAX.
    let (Some(near), Some(far)) = (
        number.checked_add(1),
        number.checked_add(removed).and_then(|sum| sum.checked_add(1)),
    ) else {
        return Vec::new();
    };

    let mut cousins = Cousins::default();
    cousins.search(graph, node, near, far);
    cousins.search(graph, node, far, near);
    cousins.found
}

#[derive(Default)]
struct Cousins {
    seen: HashSet<usize>,
    found: Vec<usize>,
}

impl Cousins {
    /// Depth-first over up/down steps, in the same order a recursive walk would visit.
    fn search(&mut self, graph: &GraphStore, start: usize, up: usize, down: usize) {
        let labels = graph.labels();
        let mut stack = vec![Step {
            node: start,
            up,
            down,
            excluded: start,
        }];

        while let Some(step) = stack.pop() {
            let edges = graph.edges(step.node);

            if step.up > 0 {
                // Reversed so the first edge is popped first.
                for edge in edges.iter().rev().filter(|e| labels.is_parent(&e.label)) {
                    stack.push(Step {
                        node: edge.target_index,
                        up: step.up - 1,
                        down: step.down,
                        excluded: step.node,
                    });
                }
            } else if step.down > 0 {
                for edge in edges
                    .iter()
                    .rev()
                    .filter(|e| labels.is_child(&e.label) && e.target_index != step.excluded)
                {
                    stack.push(Step {
                        node: edge.target_index,
                        up: 0,
                        down: step.down - 1,
                        excluded: step.excluded,
                    });
                }
            } else if self.seen.insert(step.node) {
                self.found.push(step.node);
            }
        }
    }
}
