use chrono::{DateTime, Utc};
use tracing::warn;

use scoring_core::constants::{ATTESTATION_KIND, CONFIDENCE_DECIMALS};
use scoring_core::errors::{ScoringError, ScoringResult};
use scoring_core::models::{Annotation, Policy};

use crate::attestation::{self, AttestationCoverage};

/// Weighted confidence:
///
/// ```text
/// confidence = round(passedWeight / totalWeight, 2)
///
/// totalWeight  = Σ weight(generic) + weight(attestation)
/// passedWeight = Σ weight(generic, satisfied) + attestationContribution
/// ```
///
/// The attestation weight always joins the total, even when no attestation
/// annotation was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub policy: String,
    /// Satisfied non-attestation annotations.
    pub passed: usize,
    /// Non-attestation annotations considered.
    pub count: usize,
    pub generic_total_weight: f64,
    pub generic_passed_weight: f64,
    pub attestation_weight: u8,
    pub attestation: AttestationCoverage,
    pub total_weight: f64,
    pub passed_weight: f64,
    /// Confidence before rounding.
    pub raw_confidence: f64,
    pub confidence: f64,
}

/// Annotations split by how they are scored.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub attestation: Vec<&'a Annotation>,
    pub generic: Vec<&'a Annotation>,
}

/// Separate attestation annotations from everything else.
pub fn partition<'a>(annotations: impl IntoIterator<Item = &'a Annotation>) -> Partition<'a> {
    let mut split = Partition::default();
    for annotation in annotations {
        if annotation.is_attestation() {
            split.attestation.push(annotation);
        } else {
            split.generic.push(annotation);
        }
    }
    split
}

/// Round a confidence to the published precision.
pub fn round_confidence(value: f64) -> f64 {
    let factor = 10f64.powi(CONFIDENCE_DECIMALS);
    (value * factor).round() / factor
}

/// Compute every intermediate value of a score.
///
/// # Errors
/// [`ScoringError::DivisionByZeroWeight`] when the total weight is not positive.
pub fn compute_breakdown<'a>(
    annotations: impl IntoIterator<Item = &'a Annotation>,
    policy: &Policy,
    now: DateTime<Utc>,
) -> ScoringResult<ScoreBreakdown> {
    let split = partition(annotations);

    let mut generic_total = 0.0;
    let mut generic_passed = 0.0;
    let mut passed = 0;
    for annotation in &split.generic {
        let weight = policy.fetch_weight(&annotation.kind).value() as f64;
        generic_total += weight;
        if annotation.is_satisfied {
            generic_passed += weight;
            passed += 1;
        }
    }

    let attestation_weight = policy.fetch_weight(ATTESTATION_KIND).value();
    let coverage = attestation::compute_coverage(
        split.attestation.iter().copied(),
        policy.attestation_options(),
        attestation_weight,
        now,
    );

    let total_weight = generic_total + attestation_weight as f64;
    let passed_weight = generic_passed + coverage.contribution;

    if total_weight <= 0.0 {
        warn!(policy = %policy.name(), "total weight is zero");
        return Err(ScoringError::DivisionByZeroWeight {
            policy: policy.name().to_string(),
        });
    }

    let raw_confidence = passed_weight / total_weight;

    Ok(ScoreBreakdown {
        policy: policy.name().to_string(),
        passed,
        count: split.generic.len(),
        generic_total_weight: generic_total,
        generic_passed_weight: generic_passed,
        attestation_weight,
        attestation: coverage,
        total_weight,
        passed_weight,
        raw_confidence,
        confidence: round_confidence(raw_confidence).clamp(0.0, 1.0),
    })
}
