//! Configuration system for Pulse.
//! TOML-based; every section and field falls back to `defaults`.

pub mod defaults;
pub mod evaluation_config;
pub mod grouping_config;
pub mod observability_config;
pub mod pulse_config;
pub mod selection_config;

pub use evaluation_config::EvaluationConfig;
pub use grouping_config::GroupingConfig;
pub use observability_config::ObservabilityConfig;
pub use pulse_config::PulseConfig;
pub use selection_config::SelectionConfig;
