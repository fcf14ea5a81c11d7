//! Configuration for the scoring system.
//!
//! # Examples
//!
//! ```
//! use scoring_core::config::{ProviderType, ScoringConfig};
//!
//! let config = ScoringConfig::from_toml("").unwrap();
//! assert_eq!(config.policy.provider, ProviderType::Local);
//! assert_eq!(config.observability.log_level, "info");
//! ```

pub mod defaults;
mod observability_config;
mod policy_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use observability_config::ObservabilityConfig;
pub use policy_config::{PolicySourceConfig, ProviderType};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub policy: PolicySourceConfig,
    pub observability: ObservabilityConfig,
}

impl ScoringConfig {
    /// Parse a TOML config document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: defaults::INLINE_SOURCE.to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a JSON config document.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            path: defaults::INLINE_SOURCE.to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file, choosing the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read_source(path)?;
        let source = path.display().to_string();
        let parsed: Result<Self, String> = match source_format(path)? {
            SourceFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
            SourceFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ConfigError::ParseError {
            path: source,
            message,
        })
    }
}

/// Document formats accepted for config and policy files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

/// Pick the document format from a file extension.
pub fn source_format(path: &Path) -> Result<SourceFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(SourceFormat::Toml),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(SourceFormat::Json),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

/// Read a config or policy file into memory.
pub fn read_source(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
