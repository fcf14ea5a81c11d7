use serde::{Deserialize, Serialize};

use crate::models::PolicyRecord;

/// Backing source a policy provider reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Policies listed directly in the config document.
    #[default]
    Local,
}

/// Policy source configuration.
///
/// Records are kept unvalidated here; validation happens when a provider is
/// built from them, so one bad record is reported with its classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySourceConfig {
    /// Which provider implementation serves the policies. Default: local.
    pub provider: ProviderType,
    /// Policy records for the local provider.
    pub policies: Vec<PolicyRecord>,
}
