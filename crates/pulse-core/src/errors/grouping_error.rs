use super::error_code::{self, PulseErrorCode};

/// Topic grouping and configuration search errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupingError {
    #[error("configuration search requires at least one candidate question")]
    EmptyCandidates,

    #[error("max call duration must be positive, got {value}")]
    InvalidCallDuration { value: f64 },
}

impl PulseErrorCode for GroupingError {
    fn error_code(&self) -> &'static str {
        error_code::GROUPING_ERROR
    }
}
