//! Wayfinder Kernel: transition primitives and canonical hashing.
//!
//! The kernel knows how a single step works in each supported domain. It
//! does not search; `wayfinder_search` owns the search loop and the harness
//! binds the two together.
//!
//! # Modules
//!
//! - [`grammar`] -- rule tables, their text format, and one-step rewriting
//! - [`crossing`] -- river-crossing states, moves, and validity rules
//! - [`proof`] -- canonical JSON and domain-separated SHA-256 digests
//!
//! `grammar` and `crossing` depend on `proof` only for digests. `proof`
//! depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crossing;
pub mod grammar;
pub mod proof;
