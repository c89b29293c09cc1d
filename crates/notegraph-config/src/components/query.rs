//! Query configuration

use serde::{Deserialize, Serialize};

/// Configuration for read-side graph queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Whether backlink listings also report `note-links-heading` edges.
    ///
    /// Default: false
    #[serde(default)]
    pub include_heading_links_in_backlinks: bool,
}
