use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// Parameters of the periodic-attestation trust window.
///
/// `cadence_threshold_mins` is the longest gap between two attestations that
/// still counts as continuous coverage. `time_range_mins` bounds how far back
/// the calculation looks; `0` means the whole annotation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AttestationOptionsRecord")]
pub struct AttestationOptions {
    #[serde(rename = "cadenceThresholdMins")]
    cadence_threshold_mins: i64,
    #[serde(rename = "timeRange")]
    time_range_mins: i64,
}

impl AttestationOptions {
    /// Validate and build attestation options. Values are kept unchanged.
    ///
    /// # Errors
    /// [`PolicyError::InvalidCadence`] when the cadence is not strictly
    /// positive, [`PolicyError::InvalidTimeRange`] when the range is negative.
    pub fn new(cadence_threshold_mins: i64, time_range_mins: i64) -> Result<Self, PolicyError> {
        if cadence_threshold_mins <= 0 {
            return Err(PolicyError::InvalidCadence {
                value: cadence_threshold_mins,
            });
        }
        if time_range_mins < 0 {
            return Err(PolicyError::InvalidTimeRange {
                value: time_range_mins,
            });
        }
        Ok(Self {
            cadence_threshold_mins,
            time_range_mins,
        })
    }

    pub fn cadence_threshold_mins(&self) -> i64 {
        self.cadence_threshold_mins
    }

    pub fn time_range_mins(&self) -> i64 {
        self.time_range_mins
    }

    /// Whether the calculation should consider the full annotation history.
    pub fn is_unbounded(&self) -> bool {
        self.time_range_mins == 0
    }
}

/// Unvalidated wire shape of [`AttestationOptions`].
///
/// Missing fields decode to `0`, which fails validation for the cadence and
/// selects the unbounded window for the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationOptionsRecord {
    #[serde(rename = "cadenceThresholdMins", default)]
    pub cadence_threshold_mins: i64,
    #[serde(rename = "timeRange", default)]
    pub time_range_mins: i64,
}

impl TryFrom<AttestationOptionsRecord> for AttestationOptions {
    type Error = PolicyError;

    fn try_from(record: AttestationOptionsRecord) -> Result<Self, Self::Error> {
        AttestationOptions::new(record.cadence_threshold_mins, record.time_range_mins)
    }
}

impl From<AttestationOptions> for AttestationOptionsRecord {
    fn from(opts: AttestationOptions) -> Self {
        Self {
            cadence_threshold_mins: opts.cadence_threshold_mins,
            time_range_mins: opts.time_range_mins,
        }
    }
}
