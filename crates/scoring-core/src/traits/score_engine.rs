use crate::errors::ScoringResult;
use crate::models::{Annotation, Policy, Score};

/// Confidence scoring for one unit of data.
pub trait IScoreEngine: Send + Sync {
    /// Score `annotations` recorded against `data_ref` under `policy`.
    fn compute_score(
        &self,
        data_ref: &str,
        annotations: &[Annotation],
        policy: &Policy,
    ) -> ScoringResult<Score>;
}
