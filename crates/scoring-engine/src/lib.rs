//! # scoring-engine
//!
//! Computes a confidence score for a unit of data from its annotations and a
//! weighting policy.
//!
//! Generic annotations count by weight when satisfied. Attestation
//! annotations are scored by how much of the evaluation window they keep
//! covered at the policy's cadence.

pub mod attestation;
pub mod engine;
pub mod formula;

pub use attestation::AttestationCoverage;
pub use engine::ScoreEngine;
pub use formula::ScoreBreakdown;
