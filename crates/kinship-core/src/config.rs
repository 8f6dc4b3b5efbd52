//! Configuration management for Kinship.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (KINSHIP_ prefix, e.g. `KINSHIP_DATA_FILE`)
//! 2. Config file (kinship.toml)
//! 3. Defaults

use serde::Deserialize;

use crate::error::Result;
use crate::types::{RelationshipLabels, HAS_CHILD, HAS_PARENT};

/// Top-level Kinship configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct KinshipConfig {
    /// Relationship file to load when `--file` is not given.
    #[serde(default)]
    pub data_file: Option<String>,

    /// Label of child → parent edges (default: "hasParent").
    #[serde(default = "default_parent_label")]
    pub parent_label: String,

    /// Label of parent → child edges (default: "hasChild").
    #[serde(default = "default_child_label")]
    pub child_label: String,

    /// How query results are printed.
    #[serde(default)]
    pub output: OutputFormat,
}

/// Result rendering mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per result, console messages for empty outcomes.
    #[default]
    Text,
    /// The structured result serialized as JSON.
    Json,
}

fn default_parent_label() -> String {
    HAS_PARENT.to_string()
}

fn default_child_label() -> String {
    HAS_CHILD.to_string()
}

impl Default for KinshipConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            parent_label: default_parent_label(),
            child_label: default_child_label(),
            output: OutputFormat::default(),
        }
    }
}

impl KinshipConfig {
    /// Load from `<file_prefix>.{toml,json,yaml,...}` (optional) and the environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("KINSHIP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: KinshipConfig = cfg.try_deserialize()?;
        tracing::debug!(
            parent_label = %loaded.parent_label,
            child_label = %loaded.child_label,
            "Loaded configuration"
        );
        Ok(loaded)
    }

    /// The parent/child labels the queries should interpret.
    pub fn labels(&self) -> RelationshipLabels {
        RelationshipLabels {
            parent: self.parent_label.clone(),
            child: self.child_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KinshipConfig::default();
        assert_eq!(config.data_file, None);
        assert_eq!(config.parent_label, "hasParent");
        assert_eq!(config.child_label, "hasChild");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.labels(), RelationshipLabels::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let config = KinshipConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.parent_label, "hasParent");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("kinship.toml"),
            "data_file = \"family.txt\"\nparent_label = \"parent\"\noutput = \"json\"\n",
        )
        .unwrap();

        let prefix = dir.path().join("kinship");
        let config = KinshipConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.data_file.as_deref(), Some("family.txt"));
        assert_eq!(config.parent_label, "parent");
        assert_eq!(config.child_label, "hasChild");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_output_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.toml"), "output = \"xml\"\n").unwrap();

        let prefix = dir.path().join("bad");
        assert!(KinshipConfig::load(prefix.to_str().unwrap()).is_err());
    }
}
