//! Test helpers, available under `cfg(test)` and the `test-utils` feature

pub mod mocks;

pub use mocks::{MapResolver, NameTable};
