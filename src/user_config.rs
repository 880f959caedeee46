//! Optional TOML configuration passed with `--config`.
//!
//! Without a config file the built-in catalog and phrase list are used.

use crate::catalog::LinkType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Top-level configuration.
///
/// ```toml
/// phrases = ["is blocked by", "depends on"]
///
/// [[link_types]]
/// name = "Dependency"
/// inward = "is depended on by"
/// outward = "depends on"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Replaces the built-in phrase list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,

    /// Appended to the standard catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_types: Vec<LinkType>,
}

impl UserConfig {
    /// Phrase list to map: `overrides` if non-empty, then the file's
    /// `phrases`, then `defaults`.
    #[must_use]
    pub fn resolve_phrases(&self, overrides: &[String], defaults: &[&str]) -> Vec<String> {
        if !overrides.is_empty() {
            return overrides.to_vec();
        }
        self.phrases.clone().unwrap_or_else(|| {
            defaults.iter().map(|p| (*p).to_string()).collect()
        })
    }
}

/// Parse a configuration from TOML text.
pub fn parse_user_config(content: &str) -> Result<UserConfig, UserConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load_user_config(path: Option<&Path>) -> Result<UserConfig, UserConfigError> {
    let Some(path) = path else {
        debug!("No config file given; using defaults");
        return Ok(UserConfig::default());
    };

    let content = std::fs::read_to_string(path)?;
    let config = parse_user_config(&content)?;
    debug!(
        "Loaded config from {} ({} link types)",
        path.display(),
        config.link_types.len()
    );
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod tests;
