//! Top-level Pulse configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EvaluationConfig, GroupingConfig, ObservabilityConfig, SelectionConfig};
use crate::constants::{
    MAX_DP_CAPACITY_SECONDS, MAX_DP_CELLS, MAX_PRIORITY_WEIGHT, MIN_MAX_DURATION_SECONDS,
    MIN_PRIORITY_WEIGHT,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
/// Every section falls back to compiled defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub selection: SelectionConfig,
    pub grouping: GroupingConfig,
    pub evaluation: EvaluationConfig,
    pub observability: ObservabilityConfig,
}

impl PulseConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |field: &str, message: String| {
            Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message,
            })
        };

        let s = &self.selection;
        if !s.default_max_duration_seconds.is_finite()
            || s.default_max_duration_seconds < MIN_MAX_DURATION_SECONDS
        {
            return fail(
                "selection.default_max_duration_seconds",
                format!("must be at least {MIN_MAX_DURATION_SECONDS}"),
            );
        }
        if !(MIN_PRIORITY_WEIGHT..=MAX_PRIORITY_WEIGHT).contains(&s.default_priority_threshold) {
            return fail(
                "selection.default_priority_threshold",
                "must be between 1 and 5".to_string(),
            );
        }
        if !(1..=MAX_DP_CAPACITY_SECONDS).contains(&s.dp_max_capacity_seconds) {
            return fail(
                "selection.dp_max_capacity_seconds",
                format!("must be between 1 and {MAX_DP_CAPACITY_SECONDS}"),
            );
        }
        if !(1..=MAX_DP_CELLS).contains(&s.dp_max_cells) {
            return fail(
                "selection.dp_max_cells",
                format!("must be between 1 and {MAX_DP_CELLS}"),
            );
        }

        let g = &self.grouping;
        if g.max_group_size == 0 {
            return fail("grouping.max_group_size", "must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&g.min_compatibility_score) {
            return fail(
                "grouping.min_compatibility_score",
                "must be between 0.0 and 1.0".to_string(),
            );
        }

        let e = &self.evaluation;
        if e.batch_size == 0 {
            return fail("evaluation.batch_size", "must be greater than 0".to_string());
        }
        if e.sla_ms == 0 {
            return fail("evaluation.sla_ms", "must be greater than 0".to_string());
        }
        Ok(())
    }
}
