//! kinship-graph: Relationship queries over a directed, labeled family graph.
//!
//! Builds an in-memory graph of named people joined by labeled edges
//! ("hasParent", "hasChild", or anything else) and answers orphan, sibling,
//! descendant, shortest-path ("bingo") and cousin queries over it. Every query
//! owns its traversal state, so the graph is never mutated while queried.

pub mod cousins;
pub mod descendants;
pub mod error;
pub mod graph;
pub mod load;
pub mod queries;
pub mod render;
pub mod shortest;
pub mod state;

pub use error::GraphError;
pub use graph::{GraphEdge, GraphNode, GraphStore};

use kinship_core::types::{DescendantListing, GraphStats, PathStep};

use crate::shortest::RawPath;

/// Name-based query surface over a [`GraphStore`].
///
/// Resolves names to node indices, reports absent names as
/// [`GraphError::NodeNotFound`], and converts index results back to names.
#[derive(Debug, Clone, Default)]
pub struct KinshipEngine {
    graph: GraphStore,
}

impl From<GraphStore> for KinshipEngine {
    fn from(graph: GraphStore) -> Self {
        Self::new(graph)
    }
}

impl KinshipEngine {
    pub fn new(graph: GraphStore) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Add a node if absent. Idempotent; returns the node's index either way.
    pub fn add_node(&mut self, name: &str) -> usize {
        self.graph.add_node(name)
    }

    /// Add a directed edge, creating either endpoint if needed.
    pub fn add_edge(&mut self, from: &str, to: &str, label: &str) {
        self.graph.add_edge(from, to, label);
    }

    pub fn get_node(&self, name: &str) -> Option<&GraphNode> {
        self.graph.get_node(name)
    }

    /// Names of all nodes without a parent edge, in insertion order.
    pub fn orphans(&self) -> Vec<String> {
        self.names(queries::orphans(&self.graph))
    }

    /// Other children of every parent of `name`. Empty means no siblings.
    pub fn siblings(&self, name: &str) -> error::Result<Vec<String>> {
        let node = self.resolve(name)?;
        Ok(self.names(queries::siblings(&self.graph, node)))
    }

    /// Generation-labeled descendants of `name`.
    ///
    /// A cycle is reported through the listing's status, not as an error;
    /// the entries emitted before it was found are kept.
    pub fn descendants(&self, name: &str) -> error::Result<DescendantListing> {
        let root = self.resolve(name)?;
        let (entries, status) = descendants::walk_descendants(&self.graph, root);
        Ok(DescendantListing {
            root: name.to_string(),
            entries,
            status,
        })
    }

    /// Fewest-edges path from `from` to `to`, or `None` if there is none.
    ///
    /// Both names are checked before searching; every absent name is reported.
    pub fn shortest_path(&self, from: &str, to: &str) -> error::Result<Option<Vec<PathStep>>> {
        let (source, target) = match (self.graph.index_of(from), self.graph.index_of(to)) {
            (Some(source), Some(target)) => (source, target),
            (None, None) => {
                return Err(GraphError::NodesNotFound {
                    names: vec![from.to_string(), to.to_string()],
                })
            }
            (None, Some(_)) => return Err(self.not_found(from)),
            (Some(_), None) => return Err(self.not_found(to)),
        };

        let raw_path = shortest::shortest_path(&self.graph, source, target);
        Ok(raw_path.map(|rp| self.raw_path_to_steps(&rp)))
    }

    /// `number`-th cousins of `name`, `removed` times removed. Empty means none.
    pub fn cousins(&self, name: &str, number: usize, removed: usize) -> error::Result<Vec<String>> {
        let node = self.resolve(name)?;
        Ok(self.names(cousins::find_cousins(&self.graph, node, number, removed)))
    }

    /// Text listing of every node and its outgoing edges.
    pub fn dump(&self) -> String {
        self.graph.dump()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_nodes: self.graph.node_count(),
            total_edges: self.graph.edge_count(),
            orphan_count: queries::orphans(&self.graph).len(),
        }
    }

    fn resolve(&self, name: &str) -> error::Result<usize> {
        self.graph
            .index_of(name)
            .ok_or_else(|| self.not_found(name))
    }

    fn not_found(&self, name: &str) -> GraphError {
        GraphError::NodeNotFound {
            name: name.to_string(),
        }
    }

    fn names(&self, indices: Vec<usize>) -> Vec<String> {
        indices
            .into_iter()
            .map(|i| self.graph.name(i).to_string())
            .collect()
    }

    /// Convert raw path edges into `PathStep` entries.
    fn raw_path_to_steps(&self, raw: &RawPath) -> Vec<PathStep> {
        raw.edges
            .iter()
            .map(|&(from_idx, edge_pos)| {
                let edge = &self.graph.edges(from_idx)[edge_pos];
                PathStep {
                    from: self.graph.name(from_idx).to_string(),
                    label: edge.label.clone(),
                    to: self.graph.name(edge.target_index).to_string(),
                }
            })
            .collect()
    }
}
