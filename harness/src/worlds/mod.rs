//! World implementations for the harness runner.

pub mod grammar;
pub mod river_crossing;
