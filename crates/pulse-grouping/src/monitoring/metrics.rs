//! Grouping quality metrics:
//! - Coverage: share of candidates placed in a group
//! - Average compatibility: mean of the groups' average compatibility
//! - Balance: `1 / (|avg_group_size - 3| + 1)`
//! - Score: `0.5·coverage + 0.3·avg_compatibility + 0.2·balance`

use pulse_core::constants::TARGET_GROUP_SIZE;
use pulse_core::models::GroupingResult;
use serde::Serialize;

pub const W_COVERAGE: f64 = 0.5;
pub const W_COMPATIBILITY: f64 = 0.3;
pub const W_BALANCE: f64 = 0.2;

/// Quality of one grouping run. Every field lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupingQuality {
    pub coverage: f64,
    pub average_compatibility: f64,
    pub balance: f64,
    pub score: f64,
}

pub fn assess_quality(result: &GroupingResult) -> GroupingQuality {
    let total = result.total_count();
    let coverage = if total == 0 {
        0.0
    } else {
        (total - result.ungrouped.len()) as f64 / total as f64
    };

    let (average_compatibility, balance) = if result.groups.is_empty() {
        (0.0, 0.0)
    } else {
        let groups = result.groups.len() as f64;
        let compat = result
            .groups
            .iter()
            .map(|g| g.average_compatibility)
            .sum::<f64>()
            / groups;
        let avg_size = result.grouped_count() as f64 / groups;
        (compat, 1.0 / ((avg_size - TARGET_GROUP_SIZE).abs() + 1.0))
    };

    GroupingQuality {
        coverage,
        average_compatibility,
        balance,
        score: W_COVERAGE * coverage + W_COMPATIBILITY * average_compatibility + W_BALANCE * balance,
    }
}
