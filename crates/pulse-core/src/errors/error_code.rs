//! Stable error codes surfaced to the request layer.

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const GROUPING_ERROR: &str = "GROUPING_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const TOKENIZER_ERROR: &str = "TOKENIZER_ERROR";
pub const TASK_ERROR: &str = "TASK_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait PulseErrorCode {
    fn error_code(&self) -> &'static str;
}
