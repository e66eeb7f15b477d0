//! Build-graph isolation.
//!
//! `wayfinder-search` is domain-free: it must not depend on the kernel or
//! the harness, in its manifest or in its source.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment search source lines.
const FORBIDDEN_PATTERNS: &[&str] = &["wayfinder_kernel", "wayfinder_harness"];

fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_no, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
                    continue;
                }
                if FORBIDDEN_PATTERNS.iter().any(|p| trimmed.contains(p)) {
                    violations.push((path.display().to_string(), line_no + 1, line.to_string()));
                }
            }
        }
    }
}

#[test]
fn search_source_is_domain_free() {
    let mut violations = Vec::new();
    walk(&workspace_root().join("search").join("src"), &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from("domain crate references found in search source:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn search_cargo_toml_has_no_domain_dependencies() {
    let cargo_toml = workspace_root().join("search").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("can read search/Cargo.toml");
    for forbidden in ["wayfinder-kernel", "wayfinder-harness"] {
        assert!(
            !content.contains(forbidden),
            "search/Cargo.toml depends on {forbidden}"
        );
    }
}
