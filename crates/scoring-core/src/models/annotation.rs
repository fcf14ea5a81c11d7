use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ATTESTATION_KIND;

/// A single trust signal evaluated against a unit of data.
///
/// Annotations arrive already verified; scoring only reads `kind`,
/// `is_satisfied` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique id of the annotation document.
    #[serde(rename = "_key", default)]
    pub key: String,
    /// Key of the data being annotated.
    #[serde(rename = "dataRef", default)]
    pub data_ref: String,
    /// Hash algorithm used to fingerprint the data.
    #[serde(default)]
    pub hash: String,
    /// Host that produced the annotation.
    #[serde(default)]
    pub host: String,
    /// Annotation kind, kept open-ended so kinds outside the known set still score.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub signature: String,
    #[serde(rename = "isSatisfied")]
    pub is_satisfied: bool,
    pub timestamp: DateTime<Utc>,
}

impl Annotation {
    /// Build an annotation with only the fields scoring reads.
    pub fn new(
        data_ref: impl Into<String>,
        kind: impl Into<String>,
        is_satisfied: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            key: String::new(),
            data_ref: data_ref.into(),
            hash: String::new(),
            host: String::new(),
            kind: kind.into(),
            signature: String::new(),
            is_satisfied,
            timestamp,
        }
    }

    /// Whether this annotation is scored by the attestation calculator.
    pub fn is_attestation(&self) -> bool {
        self.kind == ATTESTATION_KIND
    }
}
