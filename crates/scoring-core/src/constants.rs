/// Scoring system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Annotation kind scored by temporal coverage instead of pass/fail.
pub const ATTESTATION_KIND: &str = "attestation";

/// Lowest relative importance a weight can carry.
pub const MIN_WEIGHT: u8 = 1;

/// Highest relative importance a weight can carry.
pub const MAX_WEIGHT: u8 = 10;

/// Weight assigned to annotation kinds a policy does not list.
pub const FALLBACK_WEIGHT: u8 = MIN_WEIGHT;

/// Decimal places kept in a published confidence value.
pub const CONFIDENCE_DECIMALS: i32 = 2;
