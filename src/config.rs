// Store connection configuration.
//
// Nothing about the store location is hard-coded. Every connection
// parameter comes from a StoreConfig, which can be built in code or
// loaded from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default store endpoint: an embedded database file in the working directory.
pub const DEFAULT_STORE_URL: &str = "lexicon.db";
/// Default name of the entries table.
pub const DEFAULT_TABLE: &str = "entries";

/// Connection parameters for the lexicon store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Store endpoint: a local database file path, or a `libsql://` /
    /// `http(s)://` URL of a remote sqld endpoint.
    pub url: String,
    /// Credential presented to remote endpoints. Local files carry none.
    pub auth_token: Option<String>,
    /// Name of the entries table.
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STORE_URL.to_string(),
            auth_token: None,
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

/// Error types for configuration loading and validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    Read(String),
    /// Config file is not valid JSON
    #[error("Failed to parse config file: {0}")]
    Parse(String),
    /// Table name is not a bare SQL identifier
    #[error("Invalid table name '{0}': expected a bare SQL identifier")]
    InvalidTable(String),
}

impl StoreConfig {
    /// Load a config from a JSON file (camelCase keys, missing keys fall
    /// back to defaults) and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let config: StoreConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Table names cannot be bound as statement parameters, so they must be
    /// restricted to bare identifiers before any SQL is assembled from them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_bare_identifier(&self.table) {
            return Err(ConfigError::InvalidTable(self.table.clone()));
        }
        Ok(())
    }

    /// True when the endpoint is a remote sqld/Turso URL rather than a
    /// local database file.
    pub fn is_remote(&self) -> bool {
        self.url.starts_with("libsql://")
            || self.url.starts_with("http://")
            || self.url.starts_with("https://")
    }
}

fn is_bare_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
