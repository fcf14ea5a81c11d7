use std::collections::HashMap;

use tracing::{debug, info};

use scoring_core::config::PolicySourceConfig;
use scoring_core::constants::VERSION;
use scoring_core::errors::{ScoringError, ScoringResult};
use scoring_core::models::{AttestationOptions, Policy, PolicyRecord, Weight};
use scoring_core::traits::IPolicyProvider;

/// Serves policies held in memory, loaded once at construction.
#[derive(Debug, Clone, Default)]
pub struct LocalPolicyProvider {
    policies: HashMap<String, Policy>,
    /// Classifier names in load order.
    order: Vec<String>,
}

impl LocalPolicyProvider {
    /// Build a provider from validated policies.
    ///
    /// # Errors
    /// [`ScoringError::DuplicateClassifier`] if two policies share a name.
    pub fn new(policies: Vec<Policy>) -> ScoringResult<Self> {
        let mut provider = Self::default();
        for policy in policies {
            let name = policy.name().to_string();
            if provider.policies.contains_key(&name) {
                return Err(ScoringError::DuplicateClassifier { classifier: name });
            }
            debug!(classifier = %name, weights = policy.weights().len(), "loaded policy");
            provider.order.push(name.clone());
            provider.policies.insert(name, policy);
        }
        info!(count = provider.order.len(), version = VERSION, "local policy provider ready");
        Ok(provider)
    }

    /// Validate raw policy records and build a provider from them.
    ///
    /// The first invalid record aborts the load.
    pub fn from_records(records: Vec<PolicyRecord>) -> ScoringResult<Self> {
        let policies = records
            .into_iter()
            .map(Policy::try_from)
            .collect::<ScoringResult<Vec<_>>>()?;
        Self::new(policies)
    }

    /// Build a provider from the `policy` section of the config.
    pub fn from_config(config: &PolicySourceConfig) -> ScoringResult<Self> {
        Self::from_records(config.policies.clone())
    }

    /// Borrow a policy without cloning it.
    pub fn policy(&self, classifier: &str) -> ScoringResult<&Policy> {
        self.policies
            .get(classifier)
            .ok_or_else(|| ScoringError::ClassifierNotFound {
                classifier: classifier.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl IPolicyProvider for LocalPolicyProvider {
    fn get_weights(&self, classifier: &str) -> ScoringResult<Vec<Weight>> {
        self.policy(classifier).map(|p| p.weights().to_vec())
    }

    fn get_attestation_options(&self, classifier: &str) -> ScoringResult<AttestationOptions> {
        self.policy(classifier).map(|p| *p.attestation_options())
    }

    fn get_policy(&self, classifier: &str) -> ScoringResult<Policy> {
        self.policy(classifier).cloned()
    }

    fn classifiers(&self) -> Vec<String> {
        self.order.clone()
    }
}
