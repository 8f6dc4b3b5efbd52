//! kinship-core: Shared types, configuration, and error handling for the Kinship relationship graph.
//!
//! This crate provides the foundational types used across all Kinship components:
//! - Relationship labels (parent / child) and path step descriptions
//! - Descendant listing and generation naming
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{KinshipConfig, OutputFormat};
pub use crate::error::KinshipError;
pub use crate::types::{
    generation_label, Descendant, DescendantListing, GraphStats, PathStep, RelationshipLabels,
    WalkStatus,
};
