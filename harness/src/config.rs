//! Run configuration: a JSON file layered under command-line overrides.
//!
//! Every field has a default, so `{}` is a complete config. Unknown keys
//! are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use forage_kernel::proof::canon::{canonical_json_bytes, CanonError};
use forage_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use forage_search::error::SearchError;
use forage_search::policy::SearchPolicyV1;

/// Turn cap for an episode unless configured otherwise.
pub const DEFAULT_MAX_TURNS: u32 = 500;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid search policy: {0}")]
    Invalid(#[from] SearchError),
    #[error("max_turns must be positive")]
    ZeroTurns,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForageConfig {
    pub search: SearchPolicyV1,
    pub max_turns: u32,
    /// Seed for the randomized baseline agents.
    pub seed: u64,
}

impl Default for ForageConfig {
    fn default() -> Self {
        Self {
            search: SearchPolicyV1::default(),
            max_turns: DEFAULT_MAX_TURNS,
            seed: 0,
        }
    }
}

impl ForageConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a bad search policy and
    /// [`ConfigError::ZeroTurns`] for a zero turn cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        Ok(())
    }

    /// Digest of the search policy, stable across key order and whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the policy cannot be canonicalized.
    pub fn policy_digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.search.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

/// Parse and validate config text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and
/// the [`ForageConfig::validate`] errors otherwise.
pub fn parse_config(text: &str) -> Result<ForageConfig, ConfigError> {
    let config: ForageConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a config file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, and the
/// [`parse_config`] errors otherwise.
pub fn load_config(path: &Path) -> Result<ForageConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}
