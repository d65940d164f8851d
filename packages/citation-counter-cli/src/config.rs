use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use citation_counter::{DEFAULT_COUNT_SUFFIX, DEFAULT_ROOT_PREFIX};

/// Defaults loaded from environment variables; CLI flags override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub vault: PathBuf,
    pub root_prefix: String,
    pub count_suffix: String,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let vault = match lookup("CITECOUNT_VAULT") {
            Some(path) => PathBuf::from(path),
            None => env::current_dir().context("Failed to get current directory")?,
        };

        Ok(Self {
            vault,
            root_prefix: lookup("CITECOUNT_ROOT")
                .unwrap_or_else(|| DEFAULT_ROOT_PREFIX.to_string()),
            count_suffix: lookup("CITECOUNT_COUNT_SUFFIX")
                .unwrap_or_else(|| DEFAULT_COUNT_SUFFIX.to_string()),
        })
    }
}
