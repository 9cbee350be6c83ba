//! Common Test Utilities
//!
//! Shared builders and catalogs used across the unit and property suites.

pub mod fixtures;

pub use fixtures::*;
