use super::error_code::{self, PulseErrorCode};

/// Rejected input: raised before any selection or grouping logic runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("max_duration_seconds {value} is below the minimum of {minimum}")]
    MaxDurationTooShort { value: f64, minimum: f64 },

    #[error("max_duration_seconds must be a finite number, got {value}")]
    MaxDurationNotFinite { value: f64 },

    #[error("priority_threshold {value} is outside [1, 5]")]
    PriorityThresholdOutOfRange { value: i64 },

    #[error("priority_weight {value} is outside [1, 5]")]
    PriorityWeightOutOfRange { value: i64 },

    #[error("unknown selection algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("invalid {kind} question: {reason}")]
    InvalidQuestionKind { kind: &'static str, reason: String },

    #[error("invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },

    #[error("invalid grouping option {field}: {reason}")]
    InvalidGroupingOption { field: &'static str, reason: String },
}

impl PulseErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
