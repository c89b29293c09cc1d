//! Graph storage, node helpers and read-side queries

pub mod factory;
pub mod query;
pub mod store;
