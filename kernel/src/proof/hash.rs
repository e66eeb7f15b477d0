//! Canonical hashing with domain separation.
//!
//! **Exactly one place defines canonical hashing.** Every digest the
//! workspace emits (run transcripts, fixture output) is computed by
//! [`canonical_hash`], so two digests are comparable only when they were
//! produced under the same domain prefix.
//!
//! Algorithm: SHA-256. Result format: `"sha256:<hex_digest>"`.

use sha2::{Digest, Sha256};

/// Algorithm tag carried by every [`ContentHash`] this crate produces.
pub const HASH_ALGORITHM: &str = "sha256";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: the inner string contains a `:` separator with non-empty
/// substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` when the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

// Domain prefixes are null-terminated so no prefix is a prefix of another.

/// Domain prefix for run transcript digests.
pub const DOMAIN_RUN_TRANSCRIPT: &[u8] = b"WAYFINDER::RUN_TRANSCRIPT::V1\0";

/// Domain prefix for individual derivation / path digests.
pub const DOMAIN_SOLUTION_PATH: &[u8] = b"WAYFINDER::SOLUTION_PATH::V1\0";

/// Domain prefix for rule-table digests.
pub const DOMAIN_RULE_TABLE: &[u8] = b"WAYFINDER::RULE_TABLE::V1\0";

/// Every domain prefix in use.
pub const ALL_DOMAINS: [&[u8]; 3] = [DOMAIN_RUN_TRANSCRIPT, DOMAIN_SOLUTION_PATH, DOMAIN_RULE_TABLE];

/// Compute `sha256(domain || data)` and wrap it as a [`ContentHash`].
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    let full = format!("{HASH_ALGORITHM}:{digest}");
    let colon = HASH_ALGORITHM.len();
    ContentHash { full, colon }
}
