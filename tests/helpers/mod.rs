// Test Helper Modules
//
// Shared infrastructure for integration tests: a stub of the upstream
// employee API served over real HTTP, plus record fixtures.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;
pub use upstream_stub::*;
