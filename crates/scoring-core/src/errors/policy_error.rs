/// Validation failures for attestation options carried by a policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("cadence threshold must be a positive number of minutes, got {value}")]
    InvalidCadence { value: i64 },

    #[error("time range must be 0 or a positive number of minutes, got {value}")]
    InvalidTimeRange { value: i64 },
}
