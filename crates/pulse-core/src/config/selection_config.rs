use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SelectionAlgorithm;

/// Selector configuration: default constraints and the knapsack guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Call budget used when a request omits one.
    pub default_max_duration_seconds: f64,
    /// Priority threshold used when a request omits one.
    pub default_priority_threshold: u8,
    /// Strategy used when a request omits one.
    pub default_algorithm: SelectionAlgorithm,
    /// Largest whole-second capacity the knapsack table may use.
    pub dp_max_capacity_seconds: u64,
    /// Largest `(items + 1) * (capacity + 1)` table the knapsack may allocate.
    pub dp_max_cells: u64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_max_duration_seconds: defaults::DEFAULT_MAX_DURATION_SECONDS,
            default_priority_threshold: defaults::DEFAULT_PRIORITY_THRESHOLD,
            default_algorithm: SelectionAlgorithm::default(),
            dp_max_capacity_seconds: defaults::DEFAULT_DP_MAX_CAPACITY_SECONDS,
            dp_max_cells: defaults::DEFAULT_DP_MAX_CELLS,
        }
    }
}
