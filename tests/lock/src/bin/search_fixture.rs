//! Runs the canonical fixture configs and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<fixture>.<key>=<value>` lines, fixtures in
//! [`fixture_configs`] order. No timing, no logging.

use lock_tests::fixtures::fixture_configs;
use wayfinder_harness::report::RunReport;
use wayfinder_harness::runner::run_digest;
use wayfinder_search::graph::TerminationReason;

fn termination_kind(t: TerminationReason) -> &'static str {
    match t {
        TerminationReason::GoalReached { .. } => "goal_reached",
        TerminationReason::Exhausted => "exhausted",
        TerminationReason::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
    }
}

fn main() {
    for (name, config) in fixture_configs() {
        let (report, digest) =
            run_digest(&config).unwrap_or_else(|e| panic!("fixture {name} failed: {e}"));

        println!("{name}.transcript_digest={}", digest.as_str());
        match report {
            RunReport::Crossing(r) => {
                println!("{name}.termination={}", termination_kind(r.termination));
                println!("{name}.path_length={}", r.path_length());
                println!("{name}.nodes_generated={}", r.nodes_generated);
                println!("{name}.expansions={}", r.expansions);
                println!("{name}.solution={}", r.summary());
            }
            RunReport::Ambiguity(r) => {
                println!("{name}.termination={}", termination_kind(r.termination));
                println!("{name}.rule_table_digest={}", r.rule_table_digest.as_str());
                println!("{name}.derivations={}", r.derivations.len());
                println!("{name}.ambiguous={}", r.is_ambiguous());
                println!("{name}.expansions={}", r.stats.expansions);
            }
        }
    }
}
