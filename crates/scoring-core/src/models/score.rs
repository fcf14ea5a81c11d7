use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Confidence computed for one `data_ref` under one policy.
///
/// Read-only once built. `passed` and `count` only cover non-attestation
/// annotations; attestation contributes through `confidence` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "_key")]
    key: Uuid,
    #[serde(rename = "dataRef")]
    data_ref: String,
    /// Serialized as `score` to match stored score documents.
    #[serde(rename = "score")]
    passed: usize,
    count: usize,
    policy: String,
    confidence: f64,
    timestamp: DateTime<Utc>,
}

impl Score {
    /// Build a score with a fresh time-ordered key.
    ///
    /// `confidence` is clamped to [0.0, 1.0].
    pub fn new(
        data_ref: impl Into<String>,
        passed: usize,
        count: usize,
        policy: impl Into<String>,
        confidence: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            key: Uuid::now_v7(),
            data_ref: data_ref.into(),
            passed,
            count,
            policy: policy.into(),
            confidence: confidence.clamp(0.0, 1.0),
            timestamp,
        }
    }

    pub fn key(&self) -> Uuid {
        self.key
    }

    pub fn data_ref(&self) -> &str {
        &self.data_ref
    }

    /// Number of satisfied non-attestation annotations.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of non-attestation annotations considered.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Name of the policy the score was computed under.
    pub fn policy(&self) -> &str {
        &self.policy
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
