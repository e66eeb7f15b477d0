//! Human-readable run results.
//!
//! Reports carry everything a caller needs to print or compare a run. The
//! wall-clock time of a crossing solve is the only field that varies
//! between identical runs; transcripts leave it out.

use std::fmt::{Display, Write as _};
use std::time::Duration;

use wayfinder_kernel::crossing::CrossingState;
use wayfinder_kernel::grammar::DerivationSide;
use wayfinder_kernel::proof::hash::ContentHash;
use wayfinder_search::graph::{SearchStats, TerminationReason};
use wayfinder_search::path::Path;

use crate::config::SearchMethod;

/// Render a derivation as `->(s0,r0)->(s1,r1)->...->(sN)`.
#[must_use]
pub fn format_derivation<S: Display, L: Display>(path: &Path<S, L>) -> String {
    let mut out = String::from("->");
    for (form, rule) in path.steps() {
        match rule {
            Some(rule) => {
                let _ = write!(out, "({form},{rule})->");
            }
            None => {
                let _ = write!(out, "({form})");
            }
        }
    }
    out
}

/// Every derivation of one target string, and the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguityReport {
    pub target: String,
    pub side: DerivationSide,
    pub method: SearchMethod,
    pub rule_table_digest: ContentHash,
    /// Formatted derivations in discovery order.
    pub derivations: Vec<String>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
}

impl AmbiguityReport {
    /// More than one derivation reaches the target.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.derivations.len() > 1
    }

    #[must_use]
    pub fn verdict(&self) -> String {
        if self.is_ambiguous() {
            format!("The grammar is ambiguous for the string: {}", self.target)
        } else {
            format!("The grammar is not ambiguous for the string: {}", self.target)
        }
    }
}

impl std::fmt::Display for AmbiguityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for derivation in &self.derivations {
            writeln!(f, "{derivation}")?;
        }
        if let TerminationReason::ExpansionBudgetExceeded { limit } = self.termination {
            writeln!(f, "Search stopped after {limit} expansions")?;
        }
        write!(f, "{}", self.verdict())
    }
}

/// A solved river crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingReport {
    pub method: SearchMethod,
    /// States from start to goal.
    pub states: Vec<CrossingState>,
    /// Move labels; `labels[i]` turns `states[i]` into `states[i + 1]`.
    pub labels: Vec<String>,
    pub nodes_generated: u64,
    pub expansions: u64,
    pub elapsed: Duration,
    pub termination: TerminationReason,
}

impl CrossingReport {
    /// Number of boat trips.
    #[must_use]
    pub fn path_length(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// States joined by `->`.
    #[must_use]
    pub fn summary(&self) -> String {
        self.states
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("->")
    }
}

impl std::fmt::Display for CrossingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} finished", self.method.display_name())?;
        writeln!(f, "{} nodes generated", self.nodes_generated)?;
        writeln!(f, "Elapsed time for {}: {:?}", self.method, self.elapsed)?;
        writeln!(f, "The solution is:")?;
        write!(f, "{}", self.summary())
    }
}

/// Result of [`crate::runner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    Ambiguity(AmbiguityReport),
    Crossing(CrossingReport),
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ambiguity(r) => r.fmt(f),
            Self::Crossing(r) => r.fmt(f),
        }
    }
}
