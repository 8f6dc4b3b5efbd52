//! Per-traversal visitation labels.
//!
//! Each traversal creates its own `TraversalState`, so labels never leak
//! between queries and the graph itself stays immutable while queried.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Visited,
}

/// Scratch labels for every node of one graph, indexed by dense node index.
#[derive(Debug, Clone)]
pub struct TraversalState {
    labels: Vec<Visit>,
}

impl TraversalState {
    /// All `node_count` nodes start `Unvisited`.
    pub fn new(node_count: usize) -> Self {
        Self {
            labels: vec![Visit::Unvisited; node_count],
        }
    }

    /// Mark a node `Visited`. Returns `true` if it was `Unvisited` before.
    pub fn mark_visited(&mut self, index: usize) -> bool {
        let was_unvisited = self.labels[index] == Visit::Unvisited;
        self.labels[index] = Visit::Visited;
        was_unvisited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unvisited() {
        let mut state = TraversalState::new(3);
        assert!((0..3).all(|i| state.mark_visited(i)));
    }

    #[test]
    fn test_mark_visited_reports_first_visit() {
        let mut state = TraversalState::new(2);
        assert!(state.mark_visited(1));
        assert!(!state.mark_visited(1));
        assert!(state.mark_visited(0));
    }

    #[test]
    fn test_fresh_state_forgets_previous_traversal() {
        let mut first = TraversalState::new(2);
        first.mark_visited(0);

        let mut second = TraversalState::new(2);
        assert!(second.mark_visited(0));
    }
}
