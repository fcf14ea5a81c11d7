use crate::errors::ScoringResult;
use crate::models::{AttestationOptions, Policy, Weight};

/// Supplies scoring policies by classifier name.
///
/// Implementations are read-only once constructed, so a single provider can
/// serve concurrent scoring calls.
pub trait IPolicyProvider: Send + Sync {
    /// Weights of the policy named `classifier`.
    ///
    /// # Errors
    /// [`crate::ScoringError::ClassifierNotFound`] for an unknown classifier.
    fn get_weights(&self, classifier: &str) -> ScoringResult<Vec<Weight>>;

    /// Attestation options of the policy named `classifier`.
    ///
    /// # Errors
    /// [`crate::ScoringError::ClassifierNotFound`] for an unknown classifier.
    fn get_attestation_options(&self, classifier: &str) -> ScoringResult<AttestationOptions>;

    /// The full policy named `classifier`.
    fn get_policy(&self, classifier: &str) -> ScoringResult<Policy>;

    /// Names of every loaded policy.
    fn classifiers(&self) -> Vec<String>;
}
