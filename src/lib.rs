//! Kynseed Rating - item reference for Kynseed (TUI Edition)
//!
//! Core library providing the item catalog, dimension filters, fuzzy
//! name search and per-item fact extraction.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
