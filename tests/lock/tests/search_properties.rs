//! Engine properties checked on real worlds: shortest BFS paths, single
//! expansion per state, legal paths, bounded termination.

use std::collections::HashSet;

use lock_tests::fixtures::{variant_rules, CROSSING_VARIANTS, REGRESS_RULES};
use lock_tests::oracle::{reachable, shortest_distance};
use wayfinder_harness::contract::SearchWorld;
use wayfinder_harness::worlds::grammar::{GrammarWorld, DEFAULT_AXIOM};
use wayfinder_harness::worlds::river_crossing::RiverCrossing;
use wayfinder_kernel::grammar::{DerivationSide, RuleTable};
use wayfinder_search::contract::StateGenerator;
use wayfinder_search::error::SearchError;
use wayfinder_search::frontier::FrontierDiscipline;
use wayfinder_search::graph::TerminationReason;
use wayfinder_search::policy::{SearchPolicy, DEFAULT_MAX_DEPTH};
use wayfinder_search::recursive::RecursiveSearcher;
use wayfinder_search::search::{SearchRun, Searcher};

type CrossingRun = SearchRun<
    <RiverCrossing as StateGenerator>::State,
    <RiverCrossing as StateGenerator>::Label,
>;

fn all_runs(world: &RiverCrossing) -> Vec<(&'static str, CrossingRun)> {
    let start = world.initial_state();
    let goal = world.goal_state();
    vec![
        (
            "bfs",
            Searcher::new(world, SearchPolicy::breadth_first())
                .unwrap()
                .find_first(start, &goal)
                .unwrap(),
        ),
        (
            "dfs",
            Searcher::new(world, SearchPolicy::depth_first())
                .unwrap()
                .find_first(start, &goal)
                .unwrap(),
        ),
        (
            "recursive_dfs",
            RecursiveSearcher::new(world).find_first(start, &goal),
        ),
    ]
}

#[test]
fn bfs_path_length_matches_reference_distance() {
    for (population, capacity) in CROSSING_VARIANTS {
        let world = RiverCrossing::from_rules(variant_rules(population, capacity));
        let start = world.initial_state();
        let goal = world.goal_state();
        let expected = shortest_distance(&world, &start, &goal);

        let run = Searcher::new(&world, SearchPolicy::breadth_first())
            .unwrap()
            .find_first(start, &goal)
            .unwrap();
        let found = match run.first_solution() {
            Ok(node) => Some(run.path(node).unwrap().edge_count()),
            Err(SearchError::NoSolutionFound { .. }) => None,
            Err(e) => panic!("({population}, {capacity}): {e}"),
        };
        assert_eq!(found, expected, "variant ({population}, {capacity})");
    }
}

#[test]
fn classic_puzzle_needs_eleven_trips() {
    let world = RiverCrossing::standard();
    assert_eq!(
        shortest_distance(&world, &world.initial_state(), &world.goal_state()),
        Some(11)
    );
}

#[test]
fn every_state_expanded_at_most_once() {
    let world = RiverCrossing::standard();
    for (method, run) in all_runs(&world) {
        let mut seen = HashSet::new();
        for event in &run.events {
            assert!(
                seen.insert(run.tree[event.node].state),
                "{method}: state {} expanded twice",
                run.tree[event.node].state
            );
        }
        assert_eq!(run.tree.expanded_count(), run.events.len(), "{method}");
    }
}

#[test]
fn solution_paths_run_from_start_to_goal_along_legal_moves() {
    let world = RiverCrossing::standard();
    for (method, run) in all_runs(&world) {
        assert!(matches!(
            run.termination,
            TerminationReason::GoalReached { .. }
        ));
        let path = run.path(run.first_solution().unwrap()).unwrap();
        assert_eq!(path.first(), Some(&world.initial_state()), "{method}");
        assert_eq!(path.last(), Some(&world.goal_state()), "{method}");

        let labels: Vec<&String> = path.labels().collect();
        assert_eq!(labels.len(), path.edge_count(), "{method}");
        for (i, pair) in path.states().windows(2).enumerate() {
            let legal = world.successors(&pair[0]);
            assert!(
                legal.iter().any(|(l, s)| l == labels[i] && *s == pair[1]),
                "{method}: step {i} {} -[{}]-> {} is not a legal move",
                pair[0],
                labels[i],
                pair[1]
            );
        }
    }
}

#[test]
fn generated_crossing_states_are_all_valid() {
    for (population, capacity) in CROSSING_VARIANTS {
        let world = RiverCrossing::from_rules(variant_rules(population, capacity));
        for (method, run) in all_runs(&world) {
            for node in run.tree.iter() {
                let s = node.state;
                assert!(world.rules().is_valid(&s), "{method}: {s}");
                assert!(s.is_safe(), "{method}: {s}");
                assert!(s.missionaries_left <= population && s.cannibals_left <= population);
                assert_eq!(s.missionaries_left + s.missionaries_right, population);
                assert_eq!(s.cannibals_left + s.cannibals_right, population);
            }
        }
    }
}

#[test]
fn exhaustive_runs_visit_exactly_the_reachable_states() {
    let world = RiverCrossing::standard();
    let reachable: HashSet<_> = reachable(&world, &world.initial_state())
        .into_iter()
        .collect();
    // All-solutions mode keeps going past the goal until the frontier empties.
    let run = Searcher::new(&world, SearchPolicy::breadth_first())
        .unwrap()
        .find_all(world.initial_state(), &world.goal_state())
        .unwrap();
    let expanded: HashSet<_> = run
        .events
        .iter()
        .map(|e| run.tree[e.node].state)
        .collect();
    assert_eq!(expanded, reachable);
    assert_eq!(run.termination, TerminationReason::Exhausted);
}

#[test]
fn infinite_regress_stops_at_depth_bound() {
    let world = GrammarWorld::new(
        RuleTable::parse(REGRESS_RULES).unwrap(),
        DerivationSide::Rightmost,
        DEFAULT_AXIOM.to_string(),
        "b".to_string(),
    );
    let run = Searcher::new(&world, SearchPolicy::ambiguity(FrontierDiscipline::Fifo))
        .unwrap()
        .find_first(world.initial_state(), &world.goal_state())
        .unwrap();

    assert_eq!(run.termination, TerminationReason::Exhausted);
    let depth_levels = u64::from(DEFAULT_MAX_DEPTH) + 1;
    assert_eq!(run.stats.expansions, depth_levels);
    assert_eq!(run.stats.depth_pruned, 1);
    assert!(matches!(
        run.first_solution(),
        Err(SearchError::NoSolutionFound { expansions }) if expansions == depth_levels
    ));
}

#[test]
fn depth_first_regress_also_terminates() {
    let world = GrammarWorld::new(
        RuleTable::parse(REGRESS_RULES).unwrap(),
        DerivationSide::Leftmost,
        DEFAULT_AXIOM.to_string(),
        "b".to_string(),
    );
    let run = Searcher::new(&world, SearchPolicy::ambiguity(FrontierDiscipline::Lifo))
        .unwrap()
        .find_all(world.initial_state(), &world.goal_state())
        .unwrap();
    assert_eq!(run.termination, TerminationReason::Exhausted);
    assert!(run.solutions.is_empty());
    assert!(run.tree.iter().all(|n| n.depth <= DEFAULT_MAX_DEPTH + 1));
}

struct Barren;

impl StateGenerator for Barren {
    type State = u8;
    type Label = ();

    fn successors(&self, _: &u8) -> Vec<((), u8)> {
        Vec::new()
    }
}

#[test]
fn barren_root_fails_after_one_expansion() {
    for policy in [SearchPolicy::breadth_first(), SearchPolicy::depth_first()] {
        let run = Searcher::new(&Barren, policy)
            .unwrap()
            .find_first(0, &1)
            .unwrap();
        assert_eq!(
            run.first_solution(),
            Err(SearchError::NoSolutionFound { expansions: 1 })
        );
    }
    let run = RecursiveSearcher::new(&Barren).find_first(0, &1);
    assert_eq!(
        run.first_solution(),
        Err(SearchError::NoSolutionFound { expansions: 1 })
    );
}

#[test]
fn expansion_budget_stops_the_crossing() {
    let world = RiverCrossing::standard();
    let policy = SearchPolicy {
        max_expansions: Some(3),
        ..SearchPolicy::breadth_first()
    };
    let run = Searcher::new(&world, policy)
        .unwrap()
        .find_first(world.initial_state(), &world.goal_state())
        .unwrap();
    assert_eq!(
        run.termination,
        TerminationReason::ExpansionBudgetExceeded { limit: 3 }
    );
    assert_eq!(run.stats.expansions, 3);
}
