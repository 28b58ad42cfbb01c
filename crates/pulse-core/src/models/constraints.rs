use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::priority::PriorityWeight;
use crate::config::defaults;
use crate::constants::MIN_MAX_DURATION_SECONDS;
use crate::errors::ValidationError;

/// Selection strategy requested for an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionAlgorithm {
    /// Priority order with a full scan past rejections.
    #[default]
    GreedyPriority,
    /// 0/1 knapsack over whole-second durations.
    DynamicProgramming,
    /// Per-tier sub-budgets followed by a shared remainder pass.
    TimeBalanced,
    /// Greedy with durations derived purely from token counts.
    TokenEstimation,
}

impl SelectionAlgorithm {
    pub const ALL: [SelectionAlgorithm; 4] = [
        SelectionAlgorithm::GreedyPriority,
        SelectionAlgorithm::DynamicProgramming,
        SelectionAlgorithm::TimeBalanced,
        SelectionAlgorithm::TokenEstimation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GreedyPriority => "greedy_priority",
            Self::DynamicProgramming => "dynamic_programming",
            Self::TimeBalanced => "time_balanced",
            Self::TokenEstimation => "token_estimation",
        }
    }
}

impl fmt::Display for SelectionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionAlgorithm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Validated, immutable constraints for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Constraints {
    max_duration_seconds: f64,
    priority_threshold: PriorityWeight,
    algorithm: SelectionAlgorithm,
}

impl Constraints {
    /// Build constraints, rejecting budgets below 30 seconds.
    pub fn new(
        max_duration_seconds: f64,
        priority_threshold: u8,
        algorithm: SelectionAlgorithm,
    ) -> Result<Self, ValidationError> {
        if !max_duration_seconds.is_finite() {
            return Err(ValidationError::MaxDurationNotFinite {
                value: max_duration_seconds,
            });
        }
        if max_duration_seconds < MIN_MAX_DURATION_SECONDS {
            return Err(ValidationError::MaxDurationTooShort {
                value: max_duration_seconds,
                minimum: MIN_MAX_DURATION_SECONDS,
            });
        }
        let priority_threshold = PriorityWeight::new(priority_threshold).map_err(|_| {
            ValidationError::PriorityThresholdOutOfRange {
                value: i64::from(priority_threshold),
            }
        })?;
        Ok(Self {
            max_duration_seconds,
            priority_threshold,
            algorithm,
        })
    }

    pub fn max_duration_seconds(&self) -> f64 {
        self.max_duration_seconds
    }

    pub fn priority_threshold(&self) -> PriorityWeight {
        self.priority_threshold
    }

    pub fn algorithm(&self) -> SelectionAlgorithm {
        self.algorithm
    }

    /// Same budget and threshold, different strategy.
    pub fn with_algorithm(self, algorithm: SelectionAlgorithm) -> Self {
        Self { algorithm, ..self }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_duration_seconds: defaults::DEFAULT_MAX_DURATION_SECONDS,
            priority_threshold: PriorityWeight::LOW,
            algorithm: SelectionAlgorithm::GreedyPriority,
        }
    }
}
