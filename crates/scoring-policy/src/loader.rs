//! Policy source documents.
//!
//! A JSON document is an array of policy records. A TOML document lists
//! them under `[[policies]]`.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use scoring_core::config::defaults::INLINE_SOURCE;
use scoring_core::config::{self, SourceFormat};
use scoring_core::errors::{ConfigError, ScoringResult};
use scoring_core::models::{Policy, PolicyRecord};

#[derive(Debug, Deserialize)]
struct TomlPolicyDocument {
    #[serde(default)]
    policies: Vec<PolicyRecord>,
}

/// Parse and validate a JSON array of policy records.
pub fn load_policies_json(content: &str) -> ScoringResult<Vec<Policy>> {
    let records = parse_json(content, INLINE_SOURCE)?;
    validate(records)
}

/// Parse and validate a TOML `[[policies]]` document.
pub fn load_policies_toml(content: &str) -> ScoringResult<Vec<Policy>> {
    let records = parse_toml(content, INLINE_SOURCE)?;
    validate(records)
}

/// Load a policy file, choosing the format from its extension.
pub fn load_policies_file(path: &Path) -> ScoringResult<Vec<Policy>> {
    let content = config::read_source(path)?;
    let source = path.display().to_string();
    let records = match config::source_format(path)? {
        SourceFormat::Json => parse_json(&content, &source)?,
        SourceFormat::Toml => parse_toml(&content, &source)?,
    };
    debug!(path = %source, records = records.len(), "read policy document");
    validate(records)
}

fn parse_json(content: &str, source: &str) -> Result<Vec<PolicyRecord>, ConfigError> {
    serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
        path: source.to_string(),
        message: e.to_string(),
    })
}

fn parse_toml(content: &str, source: &str) -> Result<Vec<PolicyRecord>, ConfigError> {
    toml::from_str::<TomlPolicyDocument>(content)
        .map(|doc| doc.policies)
        .map_err(|e| ConfigError::ParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
}

fn validate(records: Vec<PolicyRecord>) -> ScoringResult<Vec<Policy>> {
    records.into_iter().map(Policy::try_from).collect()
}
