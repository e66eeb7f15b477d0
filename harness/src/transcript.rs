//! Run transcripts: the deterministic projection of a report.
//!
//! A transcript is canonical JSON over every report field except
//! wall-clock time. Two runs of the same config must produce byte-identical
//! transcripts, in one process or across processes; the digest is what
//! lock tests compare.

use serde_json::{json, Value};

use wayfinder_kernel::proof::canon::{canonical_json_bytes, CanonError};
use wayfinder_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_RUN_TRANSCRIPT, DOMAIN_SOLUTION_PATH,
};
use wayfinder_search::graph::{SearchStats, TerminationReason};

use crate::report::{AmbiguityReport, CrossingReport, RunReport};

/// Schema tag written into every transcript.
pub const TRANSCRIPT_SCHEMA_VERSION: &str = "run_transcript.v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTranscript {
    value: Value,
}

impl RunTranscript {
    #[must_use]
    pub fn from_report(report: &RunReport) -> Self {
        let value = match report {
            RunReport::Ambiguity(r) => ambiguity_json(r),
            RunReport::Crossing(r) => crossing_json(r),
        };
        Self { value }
    }

    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.value
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if the transcript holds a non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.value)
    }

    /// `canonical_hash(DOMAIN_RUN_TRANSCRIPT, canonical bytes)`.
    ///
    /// # Errors
    ///
    /// Same as [`RunTranscript::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_RUN_TRANSCRIPT, &bytes))
    }
}

fn ambiguity_json(r: &AmbiguityReport) -> Value {
    let solution_digest = canonical_hash(DOMAIN_SOLUTION_PATH, r.derivations.join("\n").as_bytes());
    json!({
        "ambiguous": r.is_ambiguous(),
        "derivations": r.derivations,
        "method": r.method.as_str(),
        "rule_table_digest": r.rule_table_digest.as_str(),
        "schema_version": TRANSCRIPT_SCHEMA_VERSION,
        "side": r.side.as_str(),
        "solution_digest": solution_digest.as_str(),
        "stats": stats_json(&r.stats),
        "target": r.target,
        "termination": termination_json(r.termination),
        "world": "grammar",
    })
}

fn crossing_json(r: &CrossingReport) -> Value {
    let states: Vec<Value> = r
        .states
        .iter()
        .map(|s| {
            let (ml, cl, b, mr, cr) = s.as_tuple();
            json!([ml, cl, b, mr, cr])
        })
        .collect();
    let solution_digest = canonical_hash(DOMAIN_SOLUTION_PATH, r.summary().as_bytes());
    json!({
        "expansions": r.expansions,
        "labels": r.labels,
        "method": r.method.as_str(),
        "nodes_generated": r.nodes_generated,
        "path_length": r.path_length(),
        "schema_version": TRANSCRIPT_SCHEMA_VERSION,
        "solution_digest": solution_digest.as_str(),
        "states": states,
        "termination": termination_json(r.termination),
        "world": "river_crossing",
    })
}

fn stats_json(s: &SearchStats) -> Value {
    json!({
        "depth_pruned": s.depth_pruned,
        "expansions": s.expansions,
        "extractions": s.extractions,
        "frontier_high_water": s.frontier_high_water,
        "nodes_generated": s.nodes_generated,
        "revisits_skipped": s.revisits_skipped,
        "solutions": s.solutions,
        "suppressed_open": s.suppressed_open,
        "suppressed_visited": s.suppressed_visited,
    })
}

fn termination_json(t: TerminationReason) -> Value {
    match t {
        TerminationReason::GoalReached { node } => {
            json!({ "kind": "goal_reached", "node": node.index() })
        }
        TerminationReason::Exhausted => json!({ "kind": "exhausted" }),
        TerminationReason::ExpansionBudgetExceeded { limit } => {
            json!({ "kind": "expansion_budget_exceeded", "limit": limit })
        }
    }
}
