//! # scoring-policy
//!
//! Policy providers for the scoring engine.
//!
//! - [`local`]: in-memory provider over already-loaded policy records
//! - [`loader`]: parse policy source documents (JSON or TOML)
//! - [`factory`]: build a provider from [`PolicySourceConfig`](scoring_core::config::PolicySourceConfig)

pub mod factory;
pub mod loader;
pub mod local;

pub use factory::new_policy_provider;
pub use loader::{load_policies_file, load_policies_json, load_policies_toml};
pub use local::LocalPolicyProvider;
