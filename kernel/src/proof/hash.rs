//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Every prefix is
//! null-terminated and unique per artifact kind, so equal payloads hashed for
//! different purposes never collide.

use sha2::{Digest, Sha256};

/// Algorithm tag carried in every [`ContentHash`].
const ALGORITHM: &str = "sha256";

/// Domain separators for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Canonical JSON of a per-turn decision report.
    DecisionReport,
    /// Canonical JSON of a search policy echo.
    SearchPolicy,
    /// Normalized maze layout text.
    Layout,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        HashDomain::DecisionReport,
        HashDomain::SearchPolicy,
        HashDomain::Layout,
    ];

    /// The raw prefix bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            HashDomain::DecisionReport => b"FORAGE::DECISION_REPORT::V1\0",
            HashDomain::SearchPolicy => b"FORAGE::SEARCH_POLICY::V1\0",
            HashDomain::Layout => b"FORAGE::LAYOUT::V1\0",
        }
    }
}

/// A content-addressed hash in `"algorithm:hex_digest"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"`.
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

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

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

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("{ALGORITHM}:{digest}"),
        colon: ALGORITHM.len(),
    }
}
