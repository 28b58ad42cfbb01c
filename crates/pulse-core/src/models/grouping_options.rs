use serde::{Deserialize, Serialize};

use crate::config::{defaults, GroupingConfig};
use crate::errors::ValidationError;

/// Options for one grouping call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingOptions {
    pub max_group_size: usize,
    pub min_compatibility_score: f64,
    pub use_semantic_similarity: bool,
    /// Try caller-supplied persisted groups before forming new ones.
    pub preserve_existing_groups: bool,
}

impl GroupingOptions {
    /// Options for a (size, min-compatibility) profile, other flags at their defaults.
    pub fn profile(max_group_size: usize, min_compatibility_score: f64) -> Self {
        Self {
            max_group_size,
            min_compatibility_score,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_group_size == 0 {
            return Err(ValidationError::InvalidGroupingOption {
                field: "max_group_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.min_compatibility_score) {
            return Err(ValidationError::InvalidGroupingOption {
                field: "min_compatibility_score",
                reason: format!("must be within [0, 1], got {}", self.min_compatibility_score),
            });
        }
        Ok(())
    }
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            max_group_size: defaults::DEFAULT_MAX_GROUP_SIZE,
            min_compatibility_score: defaults::DEFAULT_MIN_COMPATIBILITY_SCORE,
            use_semantic_similarity: defaults::DEFAULT_USE_SEMANTIC_SIMILARITY,
            preserve_existing_groups: defaults::DEFAULT_PRESERVE_EXISTING_GROUPS,
        }
    }
}

impl From<&GroupingConfig> for GroupingOptions {
    fn from(config: &GroupingConfig) -> Self {
        Self {
            max_group_size: config.max_group_size,
            min_compatibility_score: config.min_compatibility_score,
            use_semantic_similarity: config.use_semantic_similarity,
            preserve_existing_groups: config.preserve_existing_groups,
        }
    }
}
