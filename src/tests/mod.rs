//! Crate-internal test suites.
//!
//! Module-local unit tests live beside their code; the suites here cover
//! behavior that spans modules.

mod common;
mod property;
mod unit;
