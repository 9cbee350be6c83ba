pub mod catalog;
pub mod dimension;
pub mod facts;
pub mod filter;
pub mod icons;
pub mod logging;

// Filter + fuzzy search over the catalog
pub mod query;
