//! Text format for rule tables.
//!
//! One rule per line:
//!
//! ```text
//! 1. S -> AA
//! 2. A -> aSa
//! 3. A -> ε
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. `ε` (or nothing
//! after the arrow) is the empty body. Heads are ordered by first
//! appearance; alternatives under one head are sorted by rule id.

use crate::grammar::rules::{Production, RuleId, RuleTable, RuleTableError};

/// The symbol accepted for an empty body.
pub const EPSILON: &str = "ε";

impl RuleTable {
    /// Parse a rule table from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTableError::MalformedLine`] for a line without a
    /// `<id>.` prefix, without `->`, or with a non-numeric id, and any
    /// construction error from [`RuleTable::new`].
    pub fn parse(text: &str) -> Result<Self, RuleTableError> {
        let mut triples: Vec<(RuleId, String, String)> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            triples.push(parse_line(idx + 1, line)?);
        }

        let table = Self::from_rules(triples)?;
        let mut productions: Vec<Production> = table.into();
        for production in &mut productions {
            production.alternatives.sort_by_key(|r| r.id);
        }
        Self::new(productions)
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<(RuleId, String, String), RuleTableError> {
    let malformed = |detail: &str| RuleTableError::MalformedLine {
        line: line_no,
        detail: detail.to_string(),
    };

    let (id_part, rest) = line
        .split_once('.')
        .ok_or_else(|| malformed("expected `<id>. <head> -> <body>`"))?;
    let id: RuleId = id_part
        .trim()
        .parse()
        .map_err(|_| malformed("rule id is not a non-negative integer"))?;

    let (head, body) = rest
        .split_once("->")
        .ok_or_else(|| malformed("missing `->`"))?;
    let head = head.trim();
    if head.is_empty() {
        return Err(RuleTableError::EmptyHead { rule: Some(id) });
    }
    let body = body.trim();
    let body = if body == EPSILON { "" } else { body };

    Ok((id, head.to_string(), body.to_string()))
}
