//! Periodic-attestation trust.
//!
//! Attestations are expected at least every `cadence` minutes. Each gap
//! between consecutive attestations is credited up to `cadence` minutes, and
//! the credited time is divided by the length of the evaluation window:
//!
//! ```text
//! contribution = min(1, covered / elapsed) × weight
//! ```
//!
//! With a bounded window of `range` minutes, attestations up to `cadence`
//! minutes before the window start still count: the latest of them seeds the
//! coverage with the part of its cadence that reaches into the window.

use chrono::{DateTime, Duration, Utc};

use scoring_core::models::{Annotation, AttestationOptions};

/// Intermediate values of one attestation trust calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct AttestationCoverage {
    /// Attestations that survived the window filter.
    pub considered: usize,
    /// Start of the evaluation window, `None` when nothing was considered.
    pub window_start: Option<DateTime<Utc>>,
    pub covered_minutes: f64,
    pub elapsed_minutes: f64,
    /// `covered / elapsed`, clamped to [0.0, 1.0].
    pub ratio: f64,
    /// `ratio × weight`, added to the passed weight of the score.
    pub contribution: f64,
}

impl AttestationCoverage {
    fn empty() -> Self {
        Self {
            considered: 0,
            window_start: None,
            covered_minutes: 0.0,
            elapsed_minutes: 0.0,
            ratio: 0.0,
            contribution: 0.0,
        }
    }
}

/// Fractional minutes from `earlier` to `later`, millisecond precision.
pub fn minutes_between(later: DateTime<Utc>, earlier: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 60_000.0
}

/// `minutes` before `instant`, saturating at the earliest representable time.
fn minutes_before(instant: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    Duration::try_minutes(minutes)
        .and_then(|span| instant.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Compute attestation coverage with every intermediate value.
pub fn compute_coverage<'a>(
    annotations: impl IntoIterator<Item = &'a Annotation>,
    opts: &AttestationOptions,
    weight: u8,
    now: DateTime<Utc>,
) -> AttestationCoverage {
    let cadence = opts.cadence_threshold_mins() as f64;

    let bounded_start =
        (!opts.is_unbounded()).then(|| minutes_before(now, opts.time_range_mins()));

    let mut timestamps: Vec<DateTime<Utc>> = match bounded_start {
        None => annotations.into_iter().map(|a| a.timestamp).collect(),
        Some(start) => {
            let grace_start = minutes_before(start, opts.cadence_threshold_mins());
            annotations
                .into_iter()
                .map(|a| a.timestamp)
                .filter(|ts| *ts > grace_start)
                .collect()
        }
    };

    if timestamps.is_empty() {
        return AttestationCoverage::empty();
    }
    timestamps.sort_unstable();

    let window_start = bounded_start.unwrap_or(timestamps[0]);

    let mut covered = 0.0;
    let mut previous: Option<DateTime<Utc>> = None;
    for &ts in &timestamps {
        if ts < window_start {
            // Only the latest pre-window attestation matters; it overwrites the seed.
            covered = cadence - minutes_between(window_start, ts);
            continue;
        }
        if let Some(prev) = previous {
            covered += minutes_between(ts, prev).min(cadence);
        }
        previous = Some(ts);
    }

    if let Some(prev) = previous {
        covered += minutes_between(now, prev).clamp(0.0, cadence);
    }

    let elapsed = minutes_between(now, window_start);
    let ratio = if elapsed > 0.0 {
        (covered / elapsed).clamp(0.0, 1.0)
    } else {
        // Unbounded window whose earliest attestation is not in the past.
        1.0
    };

    AttestationCoverage {
        considered: timestamps.len(),
        window_start: Some(window_start),
        covered_minutes: covered,
        elapsed_minutes: elapsed,
        ratio,
        contribution: ratio * weight as f64,
    }
}

/// Attestation trust contribution, in `[0, weight]`.
///
/// Returns 0 when no attestation falls inside the evaluation window.
pub fn calculate<'a>(
    annotations: impl IntoIterator<Item = &'a Annotation>,
    opts: &AttestationOptions,
    weight: u8,
    now: DateTime<Utc>,
) -> f64 {
    compute_coverage(annotations, opts, weight, now).contribution
}
