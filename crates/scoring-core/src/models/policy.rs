use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::attestation::{AttestationOptions, AttestationOptionsRecord};
use super::weight::Weight;
use crate::constants::FALLBACK_WEIGHT;
use crate::errors::ScoringError;

/// A named bundle of annotation weights and attestation options.
///
/// Immutable once built. Weight lookup goes through an index keyed by
/// annotation kind; when a kind is listed twice the first entry wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolicyRecord", into = "PolicyRecord")]
pub struct Policy {
    name: String,
    weights: Vec<Weight>,
    index: HashMap<String, usize>,
    attestation_options: AttestationOptions,
}

impl Policy {
    pub fn new(
        name: impl Into<String>,
        weights: Vec<Weight>,
        attestation_options: AttestationOptions,
    ) -> Self {
        let mut index = HashMap::with_capacity(weights.len());
        for (position, weight) in weights.iter().enumerate() {
            index
                .entry(weight.annotation_key().to_string())
                .or_insert(position);
        }
        Self {
            name: name.into(),
            weights,
            index,
            attestation_options,
        }
    }

    /// Classifier name that uniquely identifies the policy.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weights in the order the policy declared them.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn attestation_options(&self) -> &AttestationOptions {
        &self.attestation_options
    }

    /// Resolve the weight for an annotation kind.
    ///
    /// Kinds the policy does not list still count toward the score at the
    /// minimum weight instead of failing.
    pub fn fetch_weight(&self, kind: &str) -> Weight {
        match self
            .index
            .get(kind)
            .map(|&position| &self.weights[position])
            .filter(|weight| weight.value() > 0)
        {
            Some(weight) => weight.clone(),
            None => {
                tracing::debug!(policy = %self.name, kind, "no weight defined, using fallback");
                Weight::new(kind, FALLBACK_WEIGHT as i64)
            }
        }
    }

    /// Whether the policy explicitly lists a weight for `kind`.
    pub fn defines(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }
}

/// Wire shape of a policy as found in a policy source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub classifier: String,
    #[serde(default)]
    pub items: Vec<Weight>,
    #[serde(rename = "attestationOpts")]
    pub attestation_opts: AttestationOptionsRecord,
}

impl TryFrom<PolicyRecord> for Policy {
    type Error = ScoringError;

    fn try_from(record: PolicyRecord) -> Result<Self, Self::Error> {
        let attestation_options = AttestationOptions::try_from(record.attestation_opts)
            .map_err(|source| ScoringError::PolicyValidation {
                classifier: record.classifier.clone(),
                source,
            })?;
        Ok(Policy::new(record.classifier, record.items, attestation_options))
    }
}

impl From<Policy> for PolicyRecord {
    fn from(policy: Policy) -> Self {
        Self {
            classifier: policy.name,
            items: policy.weights,
            attestation_opts: policy.attestation_options.into(),
        }
    }
}
