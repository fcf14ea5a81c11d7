use serde::{Deserialize, Serialize};

use crate::constants::{MAX_WEIGHT, MIN_WEIGHT};

/// Clamp a raw weight value into `[MIN_WEIGHT, MAX_WEIGHT]`.
///
/// Values outside the range are pulled to the nearest bound rather than
/// rejected, so a policy author writing `0` or `100` still gets a usable weight.
pub fn clamp(value: i64) -> u8 {
    value.clamp(MIN_WEIGHT as i64, MAX_WEIGHT as i64) as u8
}

/// Relative importance of one annotation kind, from 1 to 10.
///
/// The value is clamped on construction and on deserialization; an absent
/// value decodes to 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WeightRecord")]
pub struct Weight {
    #[serde(rename = "key")]
    annotation_key: String,
    value: u8,
}

impl Weight {
    /// Create a weight, clamping `value` into range.
    pub fn new(annotation_key: impl Into<String>, value: i64) -> Self {
        Self {
            annotation_key: annotation_key.into(),
            value: clamp(value),
        }
    }

    /// The annotation kind this weight applies to.
    pub fn annotation_key(&self) -> &str {
        &self.annotation_key
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Wire shape of a weight before clamping.
#[derive(Debug, Deserialize)]
struct WeightRecord {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: i64,
}

impl From<WeightRecord> for Weight {
    fn from(record: WeightRecord) -> Self {
        Weight::new(record.key, record.value)
    }
}
