mod config_error;
mod policy_error;
mod scoring_error;

pub use config_error::ConfigError;
pub use policy_error::PolicyError;
pub use scoring_error::{ScoringError, ScoringResult};
