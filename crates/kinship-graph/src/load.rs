//! Relationship file loading.
//!
//! One relationship per line as three whitespace-separated fields:
//!
//! ```text
//! # comment
//! Ann hasChild Bob
//! Bob hasParent Ann
//! Cal
//! ```
//!
//! A single field declares a node with no edges. Reciprocal edges are never
//! inferred: `hasChild` and `hasParent` must both be written out.

use std::path::Path;

use kinship_core::types::RelationshipLabels;
use kinship_core::KinshipError;

use crate::error::Result;
use crate::graph::GraphStore;

/// One meaningful line of a relationship file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Node(String),
    Edge {
        from: String,
        label: String,
        to: String,
    },
}

/// Parse relationship text into entries, skipping blanks and comments.
pub fn parse_relationships(text: &str) -> std::result::Result<Vec<Entry>, KinshipError> {
    let mut entries = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let entry = match fields.as_slice() {
            [name] => Entry::Node(name.to_string()),
            [from, label, to] => Entry::Edge {
                from: from.to_string(),
                label: label.to_string(),
                to: to.to_string(),
            },
            _ => {
                return Err(KinshipError::Parse {
                    line: i + 1,
                    message: format!(
                        "expected `<from> <label> <to>` or a single name, found {} fields",
                        fields.len()
                    ),
                })
            }
        };
        entries.push(entry);
    }

    Ok(entries)
}

/// Build a graph from parsed entries, in file order.
pub fn build_graph(entries: &[Entry], labels: RelationshipLabels) -> GraphStore {
    let mut graph = GraphStore::with_labels(labels);
    for entry in entries {
        match entry {
            Entry::Node(name) => {
                graph.add_node(name);
            }
            Entry::Edge { from, label, to } => graph.add_edge(from, to, label),
        }
    }
    graph
}

/// Read and parse a relationship file into a graph.
pub fn load_graph(path: impl AsRef<Path>, labels: RelationshipLabels) -> Result<GraphStore> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let entries = parse_relationships(&text)?;
    let graph = build_graph(&entries, labels);

    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Loaded relationship graph"
    );
    Ok(graph)
}
