//! Wayfinder Search: generic uninformed state-space search.
//!
//! This crate knows nothing about any concrete problem. A problem plugs in
//! by implementing [`contract::StateGenerator`]; the engine supplies the
//! tree, the frontier, duplicate detection and path reconstruction.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_kernel      wayfinder_search
//! (grammar, crossing)   (tree, frontier, loop)
//!          \              /
//!          wayfinder_harness
//!          (worlds, config, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`node::SearchTree`]: arena of nodes with parent back-references
//! - [`frontier::Frontier`]: FIFO or LIFO pending set
//! - [`contract::StateGenerator`]: successor function plus filtered expansion
//! - [`policy::SearchPolicy`]: discipline, dedup scope and budgets
//! - [`search::Searcher`]: iterative first-solution / all-solutions search
//! - [`recursive::RecursiveSearcher`]: call-stack depth-first search
//! - [`graph::ExpandEvent`]: per-expansion audit record

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod path;
pub mod policy;
pub mod recursive;
pub mod search;
