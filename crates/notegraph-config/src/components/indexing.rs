//! Indexing configuration: how a note's edges are rebuilt when it is reindexed

use serde::{Deserialize, Serialize};

/// What happens to a note's existing edges when it is indexed again
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReindexStrategy {
    /// Append freshly derived edges; the caller clears stale ones itself.
    #[default]
    Additive,

    /// Drop the note's own outgoing edges first. Edges other notes point at
    /// it (backlinks) are left untouched.
    ClearOutgoing,
}

/// Configuration for edge derivation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingConfig {
    /// Strategy used by `reindex_note`.
    ///
    /// Default: `additive`
    #[serde(default)]
    pub reindex_strategy: ReindexStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_additive() {
        assert_eq!(
            IndexingConfig::default().reindex_strategy,
            ReindexStrategy::Additive
        );
    }

    #[test]
    fn test_deserialize_clear_outgoing() {
        let toml = r#"
            reindex_strategy = "clear_outgoing"
        "#;
        let config: IndexingConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.reindex_strategy, ReindexStrategy::ClearOutgoing);
    }

    #[test]
    fn test_deserialize_with_default() {
        let config: IndexingConfig = toml::from_str("").unwrap();
        assert_eq!(config.reindex_strategy, ReindexStrategy::Additive);
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let toml = r#"
            reindex_strategy = "rebuild_everything"
        "#;
        assert!(toml::from_str::<IndexingConfig>(toml).is_err());
    }
}
