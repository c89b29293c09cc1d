//! Edge derivation from parsed notes

pub mod builder;
pub mod path;
pub mod resolve;
