//! Sentential-form rewriting.
//!
//! One derivation step: find every occurrence of every head, pick a single
//! occurrence (leftmost or rightmost index), then apply each alternative of
//! that head at that occurrence. Each alternative yields one successor.

use serde::{Deserialize, Serialize};

use crate::grammar::rules::{Production, RuleId, RuleTable};

/// Which occurrence is rewritten when several heads match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationSide {
    /// Smallest match index.
    Leftmost,
    /// Largest match index.
    Rightmost,
}

impl DerivationSide {
    /// Short lowercase name (`"leftmost"` / `"rightmost"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Leftmost => "leftmost",
            Self::Rightmost => "rightmost",
        }
    }
}

impl std::fmt::Display for DerivationSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One place in a sentential form where a head matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site<'t> {
    /// Byte offset of the match.
    pub index: usize,
    pub production: &'t Production,
}

/// Every (possibly overlapping) occurrence of every head in `form`.
///
/// Sites are listed in table order, and by increasing index within a head.
#[must_use]
pub fn find_sites<'t>(form: &str, table: &'t RuleTable) -> Vec<Site<'t>> {
    let mut sites = Vec::new();
    for production in table.productions() {
        let head = production.head.as_str();
        let mut start = 0;
        while let Some(offset) = form[start..].find(head) {
            let index = start + offset;
            sites.push(Site { index, production });
            // Advance one character so overlapping matches are found.
            let step = form[index..].chars().next().map_or(1, char::len_utf8);
            start = index + step;
        }
    }
    sites
}

/// Pick one site by index. Ties go to the earliest site in `sites`.
#[must_use]
pub fn select_site<'s, 't>(sites: &'s [Site<'t>], side: DerivationSide) -> Option<&'s Site<'t>> {
    let mut best: Option<&Site<'t>> = None;
    for site in sites {
        let better = match (best, side) {
            (None, _) => true,
            (Some(b), DerivationSide::Leftmost) => site.index < b.index,
            (Some(b), DerivationSide::Rightmost) => site.index > b.index,
        };
        if better {
            best = Some(site);
        }
    }
    best
}

/// Replace the head matched at `site` with `body`.
#[must_use]
pub fn rewrite_at(form: &str, site: &Site<'_>, body: &str) -> String {
    let end = site.index + site.production.head.len();
    let mut out = String::with_capacity(form.len() - site.production.head.len() + body.len());
    out.push_str(&form[..site.index]);
    out.push_str(body);
    out.push_str(&form[end..]);
    out
}

/// All one-step derivations of `form`, in alternative order.
///
/// Empty when no head occurs in `form` (the form is terminal).
#[must_use]
pub fn derive_step(form: &str, table: &RuleTable, side: DerivationSide) -> Vec<(RuleId, String)> {
    let sites = find_sites(form, table);
    let Some(site) = select_site(&sites, side) else {
        return Vec::new();
    };
    site.production
        .alternatives
        .iter()
        .map(|rule| (rule.id, rewrite_at(form, site, &rule.body)))
        .collect()
}
