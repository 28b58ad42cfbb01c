//! Raw constraint values from the request layer → validated `Constraints`.

use pulse_core::config::SelectionConfig;
use pulse_core::constants::{MAX_PRIORITY_WEIGHT, MIN_PRIORITY_WEIGHT};
use pulse_core::errors::ValidationError;
use pulse_core::models::{Constraints, SelectionAlgorithm};
use serde::{Deserialize, Serialize};

/// Constraints as received, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintsRequest {
    #[serde(default)]
    pub max_duration_seconds: Option<f64>,
    #[serde(default)]
    pub priority_threshold: Option<i64>,
    #[serde(default)]
    pub algorithm: Option<String>,
}

impl ConstraintsRequest {
    /// Fill missing fields from `defaults` and validate.
    pub fn to_constraints(&self, defaults: &SelectionConfig) -> Result<Constraints, ValidationError> {
        let algorithm = match self.algorithm.as_deref() {
            Some(name) => name.parse::<SelectionAlgorithm>()?,
            None => defaults.default_algorithm,
        };

        let threshold = match self.priority_threshold {
            Some(value) => {
                if value < i64::from(MIN_PRIORITY_WEIGHT) || value > i64::from(MAX_PRIORITY_WEIGHT) {
                    return Err(ValidationError::PriorityThresholdOutOfRange { value });
                }
                value as u8
            }
            None => defaults.default_priority_threshold,
        };

        let max_duration = self
            .max_duration_seconds
            .unwrap_or(defaults.default_max_duration_seconds);

        Constraints::new(max_duration, threshold, algorithm)
    }
}
