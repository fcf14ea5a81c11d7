use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use scoring_core::errors::ScoringResult;
use scoring_core::models::{Annotation, Policy, Score};
use scoring_core::traits::{Clock, IPolicyProvider, IScoreEngine, SystemClock};

use crate::formula::{self, ScoreBreakdown};

/// Scores annotation sets under a policy, reading time from an injectable clock.
///
/// Holds no mutable state; one engine can serve concurrent callers.
pub struct ScoreEngine {
    clock: Arc<dyn Clock>,
}

impl ScoreEngine {
    /// Create an engine backed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an engine with a custom time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Score `annotations` recorded against `data_ref` under `policy`.
    ///
    /// # Errors
    /// [`scoring_core::ScoringError::DivisionByZeroWeight`] when the policy
    /// yields no positive total weight.
    #[instrument(skip(self, annotations, policy), fields(policy = %policy.name(), annotations = annotations.len()))]
    pub fn compute_score(
        &self,
        data_ref: &str,
        annotations: &[Annotation],
        policy: &Policy,
    ) -> ScoringResult<Score> {
        self.score_group(data_ref, annotations, policy)
    }

    /// Compute a score with a full breakdown of each term.
    pub fn compute_breakdown(
        &self,
        annotations: &[Annotation],
        policy: &Policy,
    ) -> ScoringResult<ScoreBreakdown> {
        formula::compute_breakdown(annotations, policy, self.clock.now())
    }

    /// Resolve the policy through `provider`, then score.
    ///
    /// # Errors
    /// [`scoring_core::ScoringError::ClassifierNotFound`] when the provider
    /// has no policy named `classifier`.
    pub fn score_for_classifier(
        &self,
        data_ref: &str,
        annotations: &[Annotation],
        classifier: &str,
        provider: &dyn IPolicyProvider,
    ) -> ScoringResult<Score> {
        let policy = provider.get_policy(classifier)?;
        self.compute_score(data_ref, annotations, &policy)
    }

    /// Score annotations belonging to many data refs at once.
    ///
    /// Annotations are grouped by `data_ref` and each group is scored in
    /// parallel. Results come back ordered by `data_ref`.
    #[instrument(skip(self, annotations, policy), fields(policy = %policy.name()))]
    pub fn score_batch(&self, annotations: &[Annotation], policy: &Policy) -> Vec<ScoringResult<Score>> {
        let mut groups: BTreeMap<&str, Vec<&Annotation>> = BTreeMap::new();
        for annotation in annotations {
            groups
                .entry(annotation.data_ref.as_str())
                .or_default()
                .push(annotation);
        }

        info!(groups = groups.len(), annotations = annotations.len(), "scoring batch");

        groups
            .into_par_iter()
            .map(|(data_ref, group)| self.score_group(data_ref, group, policy))
            .collect()
    }

    fn score_group<'a>(
        &self,
        data_ref: &str,
        annotations: impl IntoIterator<Item = &'a Annotation>,
        policy: &Policy,
    ) -> ScoringResult<Score> {
        let now = self.clock.now();
        let breakdown = formula::compute_breakdown(annotations, policy, now)?;

        debug!(
            data_ref,
            policy = %breakdown.policy,
            passed = breakdown.passed,
            count = breakdown.count,
            total_weight = breakdown.total_weight,
            passed_weight = breakdown.passed_weight,
            attestations = breakdown.attestation.considered,
            attestation_contribution = breakdown.attestation.contribution,
            confidence = breakdown.confidence,
            "computed score"
        );

        Ok(Score::new(
            data_ref,
            breakdown.passed,
            breakdown.count,
            policy.name(),
            breakdown.confidence,
            now,
        ))
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IScoreEngine for ScoreEngine {
    fn compute_score(
        &self,
        data_ref: &str,
        annotations: &[Annotation],
        policy: &Policy,
    ) -> ScoringResult<Score> {
        ScoreEngine::compute_score(self, data_ref, annotations, policy)
    }
}
