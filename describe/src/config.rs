//! Codec configuration.
//!
//! Configuration is optional; `Config::default()` reproduces the
//! canonical fragment shapes. A TOML file may override:
//!
//! ```toml
//! options = "i"
//! empty_any_of = "reject"   # or "never-match"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Value written to `$options` on every regex fragment.
    #[serde(default = "default_options")]
    pub options: String,

    /// What to do with `is any of` and an empty list.
    #[serde(default)]
    pub empty_any_of: EmptyAnyOf,
}

/// Policy for `is any of` with no alternatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyAnyOf {
    /// Fail with `Error::InvalidValueShape`; `{ $or: [] }` is not recognized.
    #[default]
    Reject,
    /// Emit `{ $or: [] }`, which matches nothing, and decode it back.
    NeverMatch,
}

fn default_options() -> String {
    // Case-insensitive
    "i".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: default_options(),
            empty_any_of: EmptyAnyOf::default(),
        }
    }
}

impl Config {
    /// Parse config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load config from a TOML file, or use defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
