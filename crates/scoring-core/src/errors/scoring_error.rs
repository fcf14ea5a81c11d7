use super::{ConfigError, PolicyError};

/// Top-level error for every fallible scoring operation.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("classifier not defined: {classifier}")]
    ClassifierNotFound { classifier: String },

    #[error("classifier defined more than once: {classifier}")]
    DuplicateClassifier { classifier: String },

    #[error("policy {classifier} failed validation: {source}")]
    PolicyValidation {
        classifier: String,
        source: PolicyError,
    },

    #[error("total weight for policy {policy} is zero, confidence is undefined")]
    DivisionByZeroWeight { policy: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type ScoringResult<T> = Result<T, ScoringError>;
