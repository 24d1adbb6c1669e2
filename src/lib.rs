//! Employee Gateway Library
//!
//! REST facade over the upstream mock employee API: it relays employee
//! records and computes a few derived views (name search, highest salary,
//! top earners) in memory.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::employees;
pub use modules::health;
