//! Wayfinder Harness: world-level orchestration for the search engine.
//!
//! The harness turns a [`config::SearchConfig`] into a world, runs the
//! requested search over it, and packages the outcome as a report with a
//! deterministic transcript.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wayfinder_search`. Worlds provide domain successors only; the runner
//! owns method dispatch and timing.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod report;
pub mod runner;
pub mod transcript;
pub mod worlds;
