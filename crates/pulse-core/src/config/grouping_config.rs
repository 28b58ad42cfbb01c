use serde::{Deserialize, Serialize};

use super::defaults;

/// Topic grouper defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub max_group_size: usize,
    pub min_compatibility_score: f64,
    pub use_semantic_similarity: bool,
    pub preserve_existing_groups: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            max_group_size: defaults::DEFAULT_MAX_GROUP_SIZE,
            min_compatibility_score: defaults::DEFAULT_MIN_COMPATIBILITY_SCORE,
            use_semantic_similarity: defaults::DEFAULT_USE_SEMANTIC_SIMILARITY,
            preserve_existing_groups: defaults::DEFAULT_PRESERVE_EXISTING_GROUPS,
        }
    }
}
