//! Plain-text rendering of query results for the console.

use kinship_core::types::{DescendantListing, PathStep};

use crate::error::GraphError;

pub fn orphans(names: &[String]) -> Vec<String> {
    names.to_vec()
}

pub fn siblings(name: &str, siblings: &[String]) -> Vec<String> {
    if siblings.is_empty() {
        return vec![format!("{name} has no siblings.")];
    }
    let mut lines = vec![format!("{name}'s siblings:")];
    lines.extend(siblings.iter().cloned());
    lines
}

/// One `"<generation> <name>"` line per entry, then "Cycle found!" if the walk hit one.
pub fn descendants(listing: &DescendantListing) -> Vec<String> {
    let mut lines: Vec<String> = listing
        .entries
        .iter()
        .map(|d| format!("{} {}", d.generation, d.name))
        .collect();
    if listing.is_cyclic() {
        lines.push("Cycle found!".to_string());
    }
    lines
}

pub fn path(steps: Option<&[PathStep]>) -> Vec<String> {
    match steps {
        Some(steps) => steps.iter().map(PathStep::to_string).collect(),
        None => vec!["No path found!".to_string()],
    }
}

pub fn cousins(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No cousins at specified level found".to_string()];
    }
    names.to_vec()
}

/// Console message for a lookup failure, or `None` for other errors.
pub fn missing(err: &GraphError) -> Option<String> {
    match err {
        GraphError::NodeNotFound { name } => Some(format!("{name} not found.")),
        GraphError::NodesNotFound { .. } => Some(err.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_core::types::{Descendant, WalkStatus};

    #[test]
    fn test_siblings_messages() {
        assert_eq!(siblings("Ann", &[]), vec!["Ann has no siblings."]);
        assert_eq!(
            siblings("Ann", &["Bob".to_string()]),
            vec!["Ann's siblings:", "Bob"]
        );
    }

    #[test]
    fn test_descendants_with_cycle() {
        let listing = DescendantListing {
            root: "A".to_string(),
            entries: vec![Descendant {
                generation: "child".to_string(),
                name: "A".to_string(),
                depth: 0,
            }],
            status: WalkStatus::CycleDetected,
        };
        assert_eq!(descendants(&listing), vec!["child A", "Cycle found!"]);
    }

    #[test]
    fn test_no_path_and_no_cousins() {
        assert_eq!(path(None), vec!["No path found!"]);
        assert_eq!(cousins(&[]), vec!["No cousins at specified level found"]);
    }

    #[test]
    fn test_missing_messages() {
        let err = GraphError::NodeNotFound {
            name: "Zed".to_string(),
        };
        assert_eq!(missing(&err).as_deref(), Some("Zed not found."));

        let err = GraphError::NodesNotFound {
            names: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(missing(&err).as_deref(), Some("A and B do not exist"));

        let err = GraphError::Io(std::io::Error::other("disk"));
        assert_eq!(missing(&err), None);
    }
}
