//! Harness runner: builds a world from a config, searches it, reports.
//!
//! # Pipeline
//!
//! ```text
//! SearchConfig → world() → policy → Searcher / RecursiveSearcher
//!   → SearchRun → paths → AmbiguityReport | CrossingReport
//! ```
//!
//! The runner owns timing and method dispatch. Search semantics live in
//! `wayfinder_search`; move and rewrite rules live in the kernel.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, info_span};

use wayfinder_kernel::crossing::CrossingError;
use wayfinder_kernel::grammar::RuleTableError;
use wayfinder_kernel::proof::canon::CanonError;
use wayfinder_kernel::proof::hash::ContentHash;
use wayfinder_search::error::SearchError;
use wayfinder_search::frontier::FrontierDiscipline;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::recursive::RecursiveSearcher;
use wayfinder_search::search::Searcher;

use crate::config::{CrossingConfig, GrammarConfig, SearchConfig, SearchMethod};
use crate::contract::SearchWorld;
use crate::report::{format_derivation, AmbiguityReport, CrossingReport, RunReport};
use crate::transcript::RunTranscript;

/// Error during a harness run.
#[derive(Debug)]
pub enum RunError {
    /// Grammar rules failed to parse or validate.
    RuleTable(RuleTableError),
    /// Crossing rules or endpoints are invalid.
    Crossing(CrossingError),
    /// Search pre-flight failure, or no solution where one was required.
    Search(SearchError),
    /// Transcript canonicalization failed.
    Canon(CanonError),
    /// The world cannot be searched with this method.
    UnsupportedMethod { world: String, method: SearchMethod },
    /// The config text is not a valid [`SearchConfig`].
    ConfigParse { detail: String },
    /// A config or rule file could not be read.
    Io { path: PathBuf, detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuleTable(e) => write!(f, "rule table: {e}"),
            Self::Crossing(e) => write!(f, "crossing rules: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
            Self::Canon(e) => write!(f, "transcript: {e}"),
            Self::UnsupportedMethod { world, method } => {
                write!(f, "method {method} is not supported for world {world}")
            }
            Self::ConfigParse { detail } => write!(f, "invalid config: {detail}"),
            Self::Io { path, detail } => write!(f, "cannot read {}: {detail}", path.display()),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RuleTable(e) => Some(e),
            Self::Crossing(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
            Self::UnsupportedMethod { .. } | Self::ConfigParse { .. } | Self::Io { .. } => None,
        }
    }
}

impl From<RuleTableError> for RunError {
    fn from(e: RuleTableError) -> Self {
        Self::RuleTable(e)
    }
}

impl From<CrossingError> for RunError {
    fn from(e: CrossingError) -> Self {
        Self::Crossing(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Run whatever `config` describes.
///
/// # Errors
///
/// See [`run_grammar`] and [`run_crossing`].
pub fn run(config: &SearchConfig) -> Result<RunReport, RunError> {
    match config {
        SearchConfig::Grammar(g) => run_grammar(g).map(RunReport::Ambiguity),
        SearchConfig::Crossing(c) => run_crossing(c).map(RunReport::Crossing),
    }
}

/// Run `config` and digest its transcript.
///
/// # Errors
///
/// Anything [`run`] returns, plus [`RunError::Canon`].
pub fn run_digest(config: &SearchConfig) -> Result<(RunReport, ContentHash), RunError> {
    let report = run(config)?;
    let digest = RunTranscript::from_report(&report).digest()?;
    Ok((report, digest))
}

/// Enumerate every derivation of the target and decide ambiguity.
///
/// Candidates are never filtered against visited or pending forms, so the
/// same target reached along two derivations is recorded twice. Depth is
/// bounded by `config.max_depth`.
///
/// # Errors
///
/// Returns [`RunError::UnsupportedMethod`] for [`SearchMethod::RecursiveDfs`],
/// [`RunError::RuleTable`] / [`RunError::Io`] for bad rules, and
/// [`RunError::Search`] for an invalid policy.
pub fn run_grammar(config: &GrammarConfig) -> Result<AmbiguityReport, RunError> {
    let world = config.world()?;
    let discipline = match config.method {
        SearchMethod::Bfs => FrontierDiscipline::Fifo,
        SearchMethod::Dfs => FrontierDiscipline::Lifo,
        SearchMethod::RecursiveDfs => {
            return Err(RunError::UnsupportedMethod {
                world: world.world_id().to_string(),
                method: config.method,
            })
        }
    };
    let policy = SearchPolicy {
        max_depth: Some(config.max_depth),
        max_expansions: config.max_expansions,
        ..SearchPolicy::ambiguity(discipline)
    };

    let span = info_span!("run_grammar", target = %config.target, side = %world.side());
    let _guard = span.enter();
    info!(rules = world.table().rule_count(), method = %config.method, "enumerating derivations");

    let run = Searcher::new(&world, policy)?.find_all(world.initial_state(), &world.goal_state())?;
    let derivations = run
        .solution_paths()?
        .iter()
        .map(format_derivation)
        .collect();

    Ok(AmbiguityReport {
        target: world.target().to_string(),
        side: world.side(),
        method: config.method,
        rule_table_digest: world.table().digest(),
        derivations,
        stats: run.stats,
        termination: run.termination,
    })
}

/// Solve one river crossing.
///
/// `max_depth` and `max_expansions` apply to the iterative methods only;
/// recursive descent is unbounded.
///
/// # Errors
///
/// Returns [`RunError::Crossing`] for invalid rules or endpoints,
/// [`RunError::Search`] for an invalid policy or when no solution exists.
pub fn run_crossing(config: &CrossingConfig) -> Result<CrossingReport, RunError> {
    let world = config.world()?;
    let initial = world.initial_state();
    let goal = world.goal_state();

    let span = info_span!("run_crossing", method = %config.method);
    let _guard = span.enter();

    let start = Instant::now();
    let run = match config.method {
        SearchMethod::Bfs | SearchMethod::Dfs => {
            let base = if config.method == SearchMethod::Bfs {
                SearchPolicy::breadth_first()
            } else {
                SearchPolicy::depth_first()
            };
            let policy = SearchPolicy {
                max_depth: config.max_depth,
                max_expansions: config.max_expansions,
                ..base
            };
            Searcher::new(&world, policy)?.find_first(initial, &goal)?
        }
        SearchMethod::RecursiveDfs => RecursiveSearcher::new(&world).find_first(initial, &goal),
    };
    let elapsed = start.elapsed();

    let path = run.path(run.first_solution()?)?;
    info!(
        trips = path.edge_count(),
        nodes = run.stats.nodes_generated,
        "crossing solved"
    );

    Ok(CrossingReport {
        method: config.method,
        states: path.states().to_vec(),
        labels: path.labels().cloned().collect(),
        nodes_generated: run.stats.nodes_generated,
        expansions: run.stats.expansions,
        elapsed,
        termination: run.termination,
    })
}
