//! Session configuration
//!
//! Immutable values handed to the session at construction; an optional
//! JSON file can override the stock tables.

use serde::{Deserialize, Serialize};
use vox_a11y::{KeyMap, NavPolicy};

/// Everything a session needs to start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Tag classification tables for the scanner
    pub policy: NavPolicy,
    /// Quick-key trigger table
    pub quick_keys: KeyMap,
    /// Whether cyclic navigation starts enabled
    pub start_active: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: NavPolicy::default(),
            quick_keys: KeyMap::default(),
            start_active: true,
        }
    }
}

/// Configuration load error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration")]
    Parse(#[from] serde_json::Error),
}

impl SimConfig {
    /// Load a config override from a JSON file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
