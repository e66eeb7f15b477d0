//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to `ALL_DOMAINS`)
//! 2. All domain byte strings are unique
//! 3. All domains follow the `WAYFINDER::*::V1\0` naming convention
//! 4. `canonical_hash` is plain `sha256(domain || data)`
//! 5. No raw `WAYFINDER::` domain literals in production source outside `hash.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use wayfinder_kernel::proof::hash::{canonical_hash, ALL_DOMAINS, HASH_ALGORITHM};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        ALL_DOMAINS.len(),
        3,
        "expected 3 domains; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in ALL_DOMAINS {
        assert!(
            seen.insert(domain),
            "duplicate domain bytes: {}",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in ALL_DOMAINS {
        let shown = String::from_utf8_lossy(domain);
        assert!(
            domain.starts_with(b"WAYFINDER::"),
            "{shown} does not start with WAYFINDER::"
        );
        assert!(domain.ends_with(b"::V1\0"), "{shown} does not end with ::V1\\0");
        assert_eq!(
            domain.iter().filter(|&&b| b == 0).count(),
            1,
            "{shown} has an interior null"
        );
    }
}

#[test]
fn canonical_hash_matches_independent_sha256() {
    let data = br#"{"a":1}"#;
    for domain in ALL_DOMAINS {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        hasher.update(data);
        let expected = format!("{HASH_ALGORITHM}:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(domain, data).as_str(), expected);
    }
}

#[test]
fn domains_separate_identical_payloads() {
    let digests: BTreeSet<_> = ALL_DOMAINS
        .iter()
        .map(|d| canonical_hash(d, b"payload"))
        .collect();
    assert_eq!(digests.len(), ALL_DOMAINS.len());
}

/// Scan kernel/, search/, harness/ source for `b"WAYFINDER::` literals.
/// The only file allowed to contain them is `hash.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let root = workspace_root();
    let pattern = "b\"WAYFINDER::";
    let authority_file = "hash.rs";
    let mut violations = Vec::new();

    for krate in ["kernel", "search", "harness"] {
        for path in walkdir(&root.join(krate).join("src")) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("//") {
                    continue;
                }
                if trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw WAYFINDER:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_path_buf()
}

/// Simple recursive directory walker.
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
