use super::error_code::{self, PulseErrorCode};
use super::{ConfigError, GroupingError, StoreError, ValidationError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("grouping error: {0}")]
    Grouping(#[from] GroupingError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tokenizer unavailable: {reason}")]
    TokenizerUnavailable { reason: String },

    #[error("background task failed: {reason}")]
    TaskFailed { reason: String },
}

impl PulseErrorCode for PulseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Grouping(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::TokenizerUnavailable { .. } => error_code::TOKENIZER_ERROR,
            Self::TaskFailed { .. } => error_code::TASK_ERROR,
        }
    }
}

pub type PulseResult<T> = Result<T, PulseError>;
