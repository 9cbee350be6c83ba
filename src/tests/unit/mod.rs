//! Unit Tests
//!
//! ### Query (`query_tests`)
//! - Per-dimension rules against whole catalogs
//! - Filter and search interplay
//!
//! ### Facts (`facts_tests`)
//! - Fact order and labels for realistic records
//!
//! ```bash
//! cargo test tests::unit
//! ```

mod facts_tests;
mod query_tests;
