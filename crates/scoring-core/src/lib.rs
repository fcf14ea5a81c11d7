//! # scoring-core
//!
//! Foundation crate for the confidence scoring system.
//! Defines the policy and annotation models, the provider and clock traits,
//! errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{ScoringError, ScoringResult};
pub use models::{Annotation, AttestationOptions, Policy, Score, Weight};
pub use traits::{Clock, FixedClock, IPolicyProvider, IScoreEngine, SystemClock};
