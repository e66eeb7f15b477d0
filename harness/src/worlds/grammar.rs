//! `GrammarWorld`: derivations of a rewriting grammar.
//!
//! States are sentential forms. One step rewrites a single occurrence
//! (leftmost or rightmost) with every alternative of its head, labelled by
//! the rule id that was applied.

use wayfinder_kernel::grammar::{derive_step, DerivationSide, RuleId, RuleTable};
use wayfinder_search::contract::StateGenerator;

use crate::contract::SearchWorld;

/// Start symbol used when none is given.
pub const DEFAULT_AXIOM: &str = "S";

pub struct GrammarWorld {
    table: RuleTable,
    side: DerivationSide,
    axiom: String,
    target: String,
}

impl GrammarWorld {
    #[must_use]
    pub fn new(
        table: RuleTable,
        side: DerivationSide,
        axiom: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            table,
            side,
            axiom: axiom.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    #[must_use]
    pub fn side(&self) -> DerivationSide {
        self.side
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl StateGenerator for GrammarWorld {
    type State = String;
    type Label = RuleId;

    fn successors(&self, form: &String) -> Vec<(RuleId, String)> {
        derive_step(form, &self.table, self.side)
    }
}

impl SearchWorld for GrammarWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "grammar"
    }

    fn initial_state(&self) -> String {
        self.axiom.clone()
    }

    fn goal_state(&self) -> String {
        self.target.clone()
    }
}
