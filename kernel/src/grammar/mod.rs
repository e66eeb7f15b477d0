//! Grammar primitives: rule tables, their text format, and rewriting.

pub mod parse;
pub mod rewrite;
pub mod rules;

pub use rewrite::{derive_step, DerivationSide};
pub use rules::{Production, Rule, RuleId, RuleTable, RuleTableError};
