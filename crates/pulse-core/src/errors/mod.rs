//! Error handling for Pulse.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod grouping_error;
pub mod pulse_error;
pub mod store_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::PulseErrorCode;
pub use grouping_error::GroupingError;
pub use pulse_error::{PulseError, PulseResult};
pub use store_error::StoreError;
pub use validation_error::ValidationError;
