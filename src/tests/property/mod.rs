//! Property-based tests for the query engine
//!
//! Uses proptest to generate catalogs, filter selections and search
//! strings, then checks invariants that hold for every input.
//!
//! ## Test Modules
//!
//! - `query_props`: Tests for filtering and search ranking
//!   - Every result satisfies every active filter
//!   - No filters and no search yields nothing
//!   - Searches never return scores at or below the cut-off
//!   - Filter-only queries keep catalog order
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod query_props;
