//! Production rule tables.
//!
//! A [`RuleTable`] maps a head string to an ordered list of alternative
//! bodies, each tagged with a caller-assigned rule id. Heads are arbitrary
//! non-empty strings (context-sensitive heads such as `aaA` are allowed);
//! bodies may be empty (ε).
//!
//! Table order is significant: it decides which head wins when two heads
//! occur at the same index of a sentential form. Alternative order is
//! significant too: it is the enumeration order of children.
//!
//! Validation happens at construction. A table that exists is well-formed.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_RULE_TABLE};

/// Caller-assigned rule number. Opaque to the search; used for display.
pub type RuleId = u32;

/// One alternative body for a head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub body: String,
}

/// A head with its ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub head: String,
    pub alternatives: Vec<Rule>,
}

/// Error type for rule table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleTableError {
    /// The table has no productions at all.
    EmptyTable,
    /// A production has an empty head string.
    EmptyHead { rule: Option<RuleId> },
    /// A production lists no alternatives.
    NoAlternatives { head: String },
    /// Two productions share a head.
    DuplicateHead { head: String },
    /// Two rules share an id.
    DuplicateRuleId { id: RuleId },
    /// A line of rule text could not be parsed (1-based line number).
    MalformedLine { line: usize, detail: String },
}

impl std::fmt::Display for RuleTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "rule table is empty"),
            Self::EmptyHead { rule: Some(id) } => write!(f, "rule {id} has an empty head"),
            Self::EmptyHead { rule: None } => write!(f, "production has an empty head"),
            Self::NoAlternatives { head } => {
                write!(f, "production for head {head:?} has no alternatives")
            }
            Self::DuplicateHead { head } => write!(f, "head {head:?} is declared twice"),
            Self::DuplicateRuleId { id } => write!(f, "rule id {id} is used more than once"),
            Self::MalformedLine { line, detail } => {
                write!(f, "malformed rule on line {line}: {detail}")
            }
        }
    }
}

impl std::error::Error for RuleTableError {}

/// A validated, ordered production rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Production>", into = "Vec<Production>")]
pub struct RuleTable {
    productions: Vec<Production>,
}

impl RuleTable {
    /// Build a table from productions in table order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTableError`] if the table is empty, a head is empty or
    /// repeated, a production has no alternatives, or a rule id repeats.
    pub fn new(productions: Vec<Production>) -> Result<Self, RuleTableError> {
        if productions.is_empty() {
            return Err(RuleTableError::EmptyTable);
        }

        let mut heads: BTreeSet<&str> = BTreeSet::new();
        let mut ids: BTreeSet<RuleId> = BTreeSet::new();
        for production in &productions {
            if production.head.is_empty() {
                return Err(RuleTableError::EmptyHead {
                    rule: production.alternatives.first().map(|r| r.id),
                });
            }
            if production.alternatives.is_empty() {
                return Err(RuleTableError::NoAlternatives {
                    head: production.head.clone(),
                });
            }
            if !heads.insert(production.head.as_str()) {
                return Err(RuleTableError::DuplicateHead {
                    head: production.head.clone(),
                });
            }
            for rule in &production.alternatives {
                if !ids.insert(rule.id) {
                    return Err(RuleTableError::DuplicateRuleId { id: rule.id });
                }
            }
        }

        Ok(Self { productions })
    }

    /// Build a table from flat `(id, head, body)` triples.
    ///
    /// Heads are ordered by first appearance; alternatives keep the order in
    /// which they were given.
    ///
    /// # Errors
    ///
    /// Same as [`RuleTable::new`].
    pub fn from_rules<I, H, B>(rules: I) -> Result<Self, RuleTableError>
    where
        I: IntoIterator<Item = (RuleId, H, B)>,
        H: Into<String>,
        B: Into<String>,
    {
        let mut productions: Vec<Production> = Vec::new();
        let mut slot_of: BTreeMap<String, usize> = BTreeMap::new();

        for (id, head, body) in rules {
            let head = head.into();
            if head.is_empty() {
                return Err(RuleTableError::EmptyHead { rule: Some(id) });
            }
            let rule = Rule {
                id,
                body: body.into(),
            };
            if let Some(&slot) = slot_of.get(&head) {
                productions[slot].alternatives.push(rule);
            } else {
                slot_of.insert(head.clone(), productions.len());
                productions.push(Production {
                    head,
                    alternatives: vec![rule],
                });
            }
        }

        Self::new(productions)
    }

    /// Productions in table order.
    #[must_use]
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Alternatives for `head`, if the head is declared.
    #[must_use]
    pub fn alternatives(&self, head: &str) -> Option<&[Rule]> {
        self.productions
            .iter()
            .find(|p| p.head == head)
            .map(|p| p.alternatives.as_slice())
    }

    /// Iterator over heads in table order.
    pub fn heads(&self) -> impl Iterator<Item = &str> {
        self.productions.iter().map(|p| p.head.as_str())
    }

    /// Total number of rules across all heads.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.productions.iter().map(|p| p.alternatives.len()).sum()
    }

    /// Canonical JSON representation (table order preserved).
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let productions: Vec<serde_json::Value> = self
            .productions
            .iter()
            .map(|p| {
                let alternatives: Vec<serde_json::Value> = p
                    .alternatives
                    .iter()
                    .map(|r| serde_json::json!({ "id": r.id, "body": r.body }))
                    .collect();
                serde_json::json!({ "head": p.head, "alternatives": alternatives })
            })
            .collect();
        serde_json::Value::Array(productions)
    }

    /// Content digest of the table.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        // The JSON holds only strings and u32 ids, so canonicalization cannot fail.
        let bytes = canonical_json_bytes(&self.to_json()).unwrap_or_default();
        canonical_hash(DOMAIN_RULE_TABLE, &bytes)
    }
}

impl TryFrom<Vec<Production>> for RuleTable {
    type Error = RuleTableError;

    fn try_from(productions: Vec<Production>) -> Result<Self, Self::Error> {
        Self::new(productions)
    }
}

impl From<RuleTable> for Vec<Production> {
    fn from(table: RuleTable) -> Self {
        table.productions
    }
}
