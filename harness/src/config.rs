//! Run configuration.
//!
//! A [`SearchConfig`] names the world and carries everything needed to
//! build it and choose a search. It is plain data: JSON in, validated
//! worlds out.
//!
//! ```json
//! { "world": "grammar", "rules": { "text": "1. S -> AA\n2. A -> aSa\n3. A -> a" },
//!   "target": "aaaaa", "side": "rightmost", "method": "bfs" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use wayfinder_kernel::crossing::moves::{DEFAULT_BOAT_CAPACITY, DEFAULT_POPULATION};
use wayfinder_kernel::crossing::{standard_moves, CrossingRules, CrossingState, Move};
use wayfinder_kernel::grammar::{DerivationSide, RuleTable};
use wayfinder_search::policy::DEFAULT_MAX_DEPTH;

use crate::runner::RunError;
use crate::worlds::grammar::{GrammarWorld, DEFAULT_AXIOM};
use crate::worlds::river_crossing::RiverCrossing;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMethod {
    /// Iterative, FIFO frontier.
    Bfs,
    /// Iterative, LIFO frontier.
    Dfs,
    /// Call-stack descent, first solution only.
    RecursiveDfs,
}

impl SearchMethod {
    /// Short tag, as in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::RecursiveDfs => "recursive_dfs",
        }
    }

    /// Human-readable name for summaries.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-first search",
            Self::Dfs => "Depth-first search",
            Self::RecursiveDfs => "Recursive depth-first search",
        }
    }
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a grammar's rules come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// Numbered rule lines (`1. S -> AA`).
    Text(String),
    /// A file of numbered rule lines.
    File(PathBuf),
    /// Structured productions, validated on deserialization.
    Productions(RuleTable),
}

impl RuleSource {
    /// # Errors
    ///
    /// Returns [`RunError::Io`] if a rule file cannot be read and
    /// [`RunError::RuleTable`] if the rules are malformed.
    pub fn load(&self) -> Result<RuleTable, RunError> {
        match self {
            Self::Text(text) => Ok(RuleTable::parse(text)?),
            Self::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| RunError::Io {
                    path: path.clone(),
                    detail: e.to_string(),
                })?;
                Ok(RuleTable::parse(&text)?)
            }
            Self::Productions(table) => Ok(table.clone()),
        }
    }
}

fn default_axiom() -> String {
    DEFAULT_AXIOM.to_string()
}

fn default_side() -> DerivationSide {
    DerivationSide::Rightmost
}

fn default_method() -> SearchMethod {
    SearchMethod::Bfs
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

/// Ambiguity check of one target string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    pub rules: RuleSource,
    #[serde(default = "default_axiom")]
    pub axiom: String,
    pub target: String,
    #[serde(default = "default_side")]
    pub side: DerivationSide,
    #[serde(default = "default_method")]
    pub method: SearchMethod,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

impl GrammarConfig {
    /// Rules from text, everything else at its default.
    #[must_use]
    pub fn from_text(rules: &str, target: &str) -> Self {
        Self {
            rules: RuleSource::Text(rules.to_string()),
            axiom: default_axiom(),
            target: target.to_string(),
            side: default_side(),
            method: default_method(),
            max_depth: default_max_depth(),
            max_expansions: None,
        }
    }

    /// # Errors
    ///
    /// Same as [`RuleSource::load`].
    pub fn world(&self) -> Result<GrammarWorld, RunError> {
        let table = self.rules.load()?;
        Ok(GrammarWorld::new(
            table,
            self.side,
            self.axiom.clone(),
            self.target.clone(),
        ))
    }
}

/// One boat move; the label defaults to the passenger list (`1M+1C`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSpec {
    pub missionaries: u8,
    pub cannibals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl From<&MoveSpec> for Move {
    fn from(spec: &MoveSpec) -> Self {
        let mut mv = Move::new(spec.missionaries, spec.cannibals);
        if let Some(label) = &spec.label {
            mv.label.clone_from(label);
        }
        mv
    }
}

fn default_population() -> u8 {
    DEFAULT_POPULATION
}

fn default_boat_capacity() -> u8 {
    DEFAULT_BOAT_CAPACITY
}

/// One river-crossing solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingConfig {
    #[serde(default = "default_population")]
    pub population: u8,
    #[serde(default = "default_boat_capacity")]
    pub boat_capacity: u8,
    /// `None` selects the five classic moves.
    #[serde(default)]
    pub moves: Option<Vec<MoveSpec>>,
    /// `None` selects everyone on the left bank.
    #[serde(default)]
    pub initial: Option<CrossingState>,
    /// `None` selects everyone on the right bank.
    #[serde(default)]
    pub goal: Option<CrossingState>,
    #[serde(default = "default_method")]
    pub method: SearchMethod,
    #[serde(default)]
    pub max_depth: Option<u32>,
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

impl Default for CrossingConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            boat_capacity: DEFAULT_BOAT_CAPACITY,
            moves: None,
            initial: None,
            goal: None,
            method: SearchMethod::Bfs,
            max_depth: None,
            max_expansions: None,
        }
    }
}

impl CrossingConfig {
    /// Classic puzzle solved with `method`.
    #[must_use]
    pub fn standard(method: SearchMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns [`RunError::Crossing`] if the rules or either endpoint are
    /// invalid.
    pub fn world(&self) -> Result<RiverCrossing, RunError> {
        let moves = match &self.moves {
            Some(specs) => specs.iter().map(Move::from).collect(),
            None => standard_moves(),
        };
        let rules = CrossingRules::new(self.population, self.boat_capacity, moves)?;
        let initial = self.initial.unwrap_or_else(|| rules.initial_state());
        let goal = self.goal.unwrap_or_else(|| rules.goal_state());
        Ok(RiverCrossing::new(rules, initial, goal)?)
    }
}

/// A complete run description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "world", rename_all = "snake_case")]
pub enum SearchConfig {
    Grammar(GrammarConfig),
    Crossing(CrossingConfig),
}

impl SearchConfig {
    #[must_use]
    pub fn method(&self) -> SearchMethod {
        match self {
            Self::Grammar(g) => g.method,
            Self::Crossing(c) => c.method,
        }
    }

    /// # Errors
    ///
    /// Returns [`RunError::ConfigParse`] if `json` is not a valid config.
    pub fn from_json_str(json: &str) -> Result<Self, RunError> {
        serde_json::from_str(json).map_err(|e| RunError::ConfigParse {
            detail: e.to_string(),
        })
    }

    /// Read a config file. A relative rule-file path is resolved against
    /// the config file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Io`] if the file cannot be read and
    /// [`RunError::ConfigParse`] if it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, RunError> {
        let text = std::fs::read_to_string(path).map_err(|e| RunError::Io {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        let mut config = Self::from_json_str(&text)?;
        if let Self::Grammar(GrammarConfig {
            rules: RuleSource::File(rule_path),
            ..
        }) = &mut config
        {
            if rule_path.is_relative() {
                if let Some(dir) = path.parent() {
                    *rule_path = dir.join(&*rule_path);
                }
            }
        }
        Ok(config)
    }
}
