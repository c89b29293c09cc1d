//! # Notegraph Configuration
//!
//! Type-safe configuration for the note graph index. Settings live in a TOML
//! file (default `$XDG_CONFIG_HOME/notegraph/config.toml`) and every section
//! falls back to its defaults when omitted.
//!
//! ```toml
//! [indexing]
//! reindex_strategy = "clear_outgoing"
//!
//! [query]
//! include_heading_links_in_backlinks = false
//! ```
//!
//! ```rust,no_run
//! use notegraph_config::GraphConfig;
//!
//! let config = GraphConfig::load(GraphConfig::default_path())?;
//! println!("{:?}", config.indexing.reindex_strategy);
//! # Ok::<(), notegraph_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod components;
mod config;

pub use components::{IndexingConfig, QueryConfig, ReindexStrategy};
pub use config::{ConfigError, ConfigResult, GraphConfig};
