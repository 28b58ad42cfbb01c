use super::error_code::{self, PulseErrorCode};

/// Errors reported by the external question store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("question not found: {id}")]
    NotFound { id: String },

    #[error("question store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("scope {scope} is not accessible: {reason}")]
    ScopeDenied { scope: String, reason: String },
}

impl PulseErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
