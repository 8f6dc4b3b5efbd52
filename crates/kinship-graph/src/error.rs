//! Error types for the kinship-graph crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("{name} not found")]
    NodeNotFound { name: String },

    #[error("{} do not exist", .names.join(" and "))]
    NodesNotFound { names: Vec<String> },

    #[error("Load error: {0}")]
    Load(#[from] kinship_core::KinshipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Every queried name that was absent from the graph, or empty for non-lookup errors.
    pub fn missing_names(&self) -> Vec<&str> {
        match self {
            Self::NodeNotFound { name } => vec![name.as_str()],
            Self::NodesNotFound { names } => names.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
