use scoring_core::config::{PolicySourceConfig, ProviderType};
use scoring_core::errors::ScoringResult;
use scoring_core::traits::IPolicyProvider;

use crate::local::LocalPolicyProvider;

/// Build the provider selected by `config.provider`.
pub fn new_policy_provider(config: &PolicySourceConfig) -> ScoringResult<Box<dyn IPolicyProvider>> {
    match config.provider {
        ProviderType::Local => Ok(Box::new(LocalPolicyProvider::from_config(config)?)),
    }
}
