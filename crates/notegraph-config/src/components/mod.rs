//! Configuration sections

mod indexing;
mod query;

pub use indexing::{IndexingConfig, ReindexStrategy};
pub use query::QueryConfig;
