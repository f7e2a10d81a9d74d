//! Shared test infrastructure
//!
//! - `test_helpers`: numeric assertions and factory fixtures

pub mod test_helpers;

// Re-export for convenient imports in test files
#[allow(unused_imports)]
pub use test_helpers::{configured_factory, relative_error, write_crosec_table};
