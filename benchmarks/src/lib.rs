//! Shared helpers for wayfinder benchmark suites.

use wayfinder_harness::config::{CrossingConfig, GrammarConfig, MoveSpec, SearchMethod};
use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::worlds::grammar::GrammarWorld;
use wayfinder_harness::worlds::river_crossing::RiverCrossing;
use wayfinder_search::frontier::FrontierDiscipline;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{SearchRun, Searcher};

/// `S -> AA`, `A -> aSa | a`. Ambiguous for `aaaaa`; the derivation tree
/// widens quickly with depth.
pub const TWIN_RULES: &str = "1. S -> AA\n2. A -> aSa\n3. A -> a\n";

/// Exactly one rightmost derivation of `abddcd`.
pub const ABDDCD_RULES: &str =
    "1. S -> ABC\n2. E -> b\n3. aaA -> aaBB\n4. B -> d\n5. A -> aE\n6. C -> dcd\n";

/// A named grammar workload.
pub struct GrammarRegime {
    pub name: &'static str,
    pub config: GrammarConfig,
}

/// A named crossing workload.
pub struct CrossingRegime {
    pub name: &'static str,
    pub config: CrossingConfig,
}

/// Grammar workloads, smallest first.
#[must_use]
pub fn grammar_regimes() -> Vec<GrammarRegime> {
    vec![
        GrammarRegime {
            name: "abddcd",
            config: GrammarConfig::from_text(ABDDCD_RULES, "abddcd"),
        },
        GrammarRegime {
            name: "twin_depth8",
            config: GrammarConfig {
                max_depth: 8,
                ..GrammarConfig::from_text(TWIN_RULES, "aaaaa")
            },
        },
        GrammarRegime {
            name: "twin_depth12",
            config: GrammarConfig {
                max_depth: 12,
                ..GrammarConfig::from_text(TWIN_RULES, "aaaaaaaa")
            },
        },
    ]
}

/// Every move seating one to `capacity` passengers, default labels.
#[must_use]
pub fn all_moves(capacity: u8) -> Vec<MoveSpec> {
    (1..=capacity)
        .flat_map(|total| {
            (0..=total).map(move |m| MoveSpec {
                missionaries: m,
                cannibals: total - m,
                label: None,
            })
        })
        .collect()
}

/// Crossing workloads, smallest first.
#[must_use]
pub fn crossing_regimes() -> Vec<CrossingRegime> {
    let wide = CrossingConfig {
        population: 5,
        boat_capacity: 3,
        moves: Some(all_moves(3)),
        ..CrossingConfig::default()
    };
    vec![
        CrossingRegime {
            name: "classic",
            config: CrossingConfig::default(),
        },
        CrossingRegime {
            name: "five_three",
            config: wide,
        },
    ]
}

/// Build the crossing world once so benchmarks time only the search.
///
/// # Panics
///
/// Panics if the regime's rules are invalid. Benchmark setup failures are fatal.
#[must_use]
pub fn crossing_world(regime: &CrossingRegime) -> RiverCrossing {
    regime.config.world().expect("crossing regime is valid")
}

/// # Panics
///
/// Panics if the regime's rules are invalid.
#[must_use]
pub fn grammar_world(regime: &GrammarRegime) -> GrammarWorld {
    regime.config.world().expect("grammar regime is valid")
}

/// Iterative policy for a method.
#[must_use]
pub fn crossing_policy(method: SearchMethod) -> SearchPolicy {
    match method {
        SearchMethod::Dfs => SearchPolicy::depth_first(),
        SearchMethod::Bfs | SearchMethod::RecursiveDfs => SearchPolicy::breadth_first(),
    }
}

/// Run `Searcher::find_first` from the world's own endpoints.
///
/// # Panics
///
/// Panics if the policy is invalid. Benchmark runs are expected to succeed.
pub fn find_first_only<W: SearchWorld>(world: &W, policy: SearchPolicy) -> SearchRun<W::State, W::Label> {
    Searcher::new(world, policy)
        .and_then(|s| s.find_first(world.initial_state(), &world.goal_state()))
        .expect("search should succeed in benchmarks")
}

/// Enumerate every derivation of the world's target.
///
/// # Panics
///
/// Panics if the policy is invalid.
pub fn find_all_derivations(
    world: &GrammarWorld,
    discipline: FrontierDiscipline,
    max_depth: u32,
) -> SearchRun<String, u32> {
    let policy = SearchPolicy {
        max_depth: Some(max_depth),
        ..SearchPolicy::ambiguity(discipline)
    };
    Searcher::new(world, policy)
        .and_then(|s| s.find_all(world.initial_state(), &world.goal_state()))
        .expect("search should succeed in benchmarks")
}
