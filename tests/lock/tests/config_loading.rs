//! Config files on disk: loading, relative rule paths, failure modes.

use std::fs;

use lock_tests::fixtures::{TWIN_DERIVATIONS, TWIN_RULES};
use wayfinder_harness::config::{RuleSource, SearchConfig, SearchMethod};
use wayfinder_harness::report::RunReport;
use wayfinder_harness::runner::{run, RunError};
use wayfinder_kernel::grammar::RuleTableError;

#[test]
fn grammar_config_with_relative_rule_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("twin.rules"), TWIN_RULES).unwrap();
    let config_path = dir.path().join("twin.json");
    fs::write(
        &config_path,
        r#"{"world":"grammar","rules":{"file":"twin.rules"},"target":"aaaaa","max_depth":8}"#,
    )
    .unwrap();

    let config = SearchConfig::load(&config_path).unwrap();
    let SearchConfig::Grammar(g) = &config else {
        panic!("expected grammar config");
    };
    assert_eq!(g.rules, RuleSource::File(dir.path().join("twin.rules")));

    let RunReport::Ambiguity(report) = run(&config).unwrap() else {
        panic!("expected ambiguity report");
    };
    assert_eq!(report.derivations, TWIN_DERIVATIONS);
}

#[test]
fn crossing_config_file_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("crossing.json");
    fs::write(
        &config_path,
        r#"{"world":"crossing","method":"recursive_dfs","population":3,"boat_capacity":2}"#,
    )
    .unwrap();

    let config = SearchConfig::load(&config_path).unwrap();
    assert_eq!(config.method(), SearchMethod::RecursiveDfs);
    let RunReport::Crossing(report) = run(&config).unwrap() else {
        panic!("expected crossing report");
    };
    assert_eq!(report.states.first().map(|s| s.as_tuple()), Some((3, 3, 1, 0, 0)));
    assert_eq!(report.states.last().map(|s| s.as_tuple()), Some((0, 0, 0, 3, 3)));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    match SearchConfig::load(&missing) {
        Err(RunError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn missing_rule_file_surfaces_at_run() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("g.json");
    fs::write(
        &config_path,
        r#"{"world":"grammar","rules":{"file":"nope.rules"},"target":"a"}"#,
    )
    .unwrap();
    let config = SearchConfig::load(&config_path).unwrap();
    assert!(matches!(run(&config), Err(RunError::Io { .. })));
}

#[test]
fn malformed_rule_line_is_reported_with_its_line_number() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.rules"), "1. S -> AA\nA => a\n").unwrap();
    let config_path = dir.path().join("g.json");
    fs::write(
        &config_path,
        r#"{"world":"grammar","rules":{"file":"bad.rules"},"target":"a"}"#,
    )
    .unwrap();
    let config = SearchConfig::load(&config_path).unwrap();
    assert!(matches!(
        run(&config),
        Err(RunError::RuleTable(RuleTableError::MalformedLine { line: 2, .. }))
    ));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("broken.json");
    fs::write(&config_path, "{\"world\":").unwrap();
    assert!(matches!(
        SearchConfig::load(&config_path),
        Err(RunError::ConfigParse { .. })
    ));
}
