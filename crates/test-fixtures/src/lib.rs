//! Test fixture loader for scoring golden datasets and scenarios.
//!
//! Provides typed deserialization of the fixture JSON files under `golden/`
//! and builders for annotations placed relative to a fixed reference time.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use scoring_core::models::{Annotation, Policy};

/// Root directory of the golden fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Fixed "now" every scenario is evaluated against.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

/// Build an annotation stamped `minutes_ago` minutes before `now`.
pub fn annotation_minutes_ago(
    now: DateTime<Utc>,
    data_ref: &str,
    kind: &str,
    satisfied: bool,
    minutes_ago: i64,
) -> Annotation {
    let mut annotation = Annotation::new(data_ref, kind, satisfied, now - Duration::minutes(minutes_ago));
    annotation.key = format!("{data_ref}-{kind}-{minutes_ago}");
    annotation
}

/// Attestation annotations at each of `offsets` minutes before `now`.
pub fn attestations_at(now: DateTime<Utc>, data_ref: &str, offsets: &[i64]) -> Vec<Annotation> {
    offsets
        .iter()
        .map(|&m| annotation_minutes_ago(now, data_ref, "attestation", true, m))
        .collect()
}

/// The policies in `golden/policies.json`.
pub fn golden_policies() -> Vec<Policy> {
    load_fixture("policies.json")
}

/// One golden policy by classifier name.
///
/// # Panics
/// Panics if the classifier is not in the fixture file.
pub fn golden_policy(classifier: &str) -> Policy {
    golden_policies()
        .into_iter()
        .find(|p| p.name() == classifier)
        .unwrap_or_else(|| panic!("no golden policy named {classifier}"))
}

/// Reference dataset for the attestation calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct AttestationReference {
    pub offsets_minutes: Vec<i64>,
    pub weight: u8,
    pub tolerance: f64,
    pub cases: Vec<AttestationCase>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttestationCase {
    pub name: String,
    pub cadence_threshold_mins: i64,
    pub time_range_mins: i64,
    pub expected: f64,
}

pub fn attestation_reference() -> AttestationReference {
    load_fixture("attestation_reference.json")
}

/// End-to-end scoring scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreScenario {
    pub name: String,
    pub policy: String,
    pub annotations: Vec<AnnotationSpec>,
    pub expected_confidence: f64,
    pub expected_passed: usize,
    pub expected_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationSpec {
    pub kind: String,
    #[serde(default = "default_satisfied")]
    pub satisfied: bool,
    pub minutes_ago: i64,
}

fn default_satisfied() -> bool {
    true
}

impl AnnotationSpec {
    pub fn to_annotation(&self, now: DateTime<Utc>, data_ref: &str) -> Annotation {
        annotation_minutes_ago(now, data_ref, &self.kind, self.satisfied, self.minutes_ago)
    }
}

impl ScoreScenario {
    /// Materialize the scenario's annotations against `now`.
    pub fn annotations(&self, now: DateTime<Utc>, data_ref: &str) -> Vec<Annotation> {
        self.annotations
            .iter()
            .map(|entry| entry.to_annotation(now, data_ref))
            .collect()
    }
}

pub fn score_scenarios() -> Vec<ScoreScenario> {
    load_fixture("score_scenarios.json")
}
