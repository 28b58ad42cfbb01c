use serde::{Deserialize, Serialize};

use super::constraints::SelectionAlgorithm;
use super::priority::{PriorityDistribution, PriorityWeight};
use super::question::Question;

/// Why a candidate was left out of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    BelowPriorityThreshold,
    ExceedsRemainingBudget,
}

/// A candidate that was not selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedQuestion {
    pub question_id: String,
    pub priority_weight: PriorityWeight,
    pub reason: ExclusionReason,
}

/// Recorded when the knapsack capacity guard fires and greedy selection is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFallback {
    pub requested: SelectionAlgorithm,
    pub used: SelectionAlgorithm,
    /// Integer capacity (whole seconds) the table would have needed.
    pub capacity_seconds: u64,
    /// Number of table cells the table would have needed.
    pub table_cells: u64,
}

/// Output of one selection. Constructed once, never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Selected questions in selection order.
    pub selected_questions: Vec<Question>,
    /// Every candidate that was not selected, in input order.
    pub excluded_questions: Vec<ExcludedQuestion>,
    /// Sum of the selected durations under the strategy's duration model.
    pub estimated_duration_seconds: f64,
    pub priority_distribution: PriorityDistribution,
    /// Strategy that produced `selected_questions`.
    pub algorithm: SelectionAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<SelectionFallback>,
}

impl EvaluationResult {
    /// Well-formed empty result: no selection, zero duration, zero distribution.
    pub fn empty(algorithm: SelectionAlgorithm) -> Self {
        Self {
            selected_questions: Vec::new(),
            excluded_questions: Vec::new(),
            estimated_duration_seconds: 0.0,
            priority_distribution: PriorityDistribution::default(),
            algorithm,
            fallback: None,
        }
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.selected_questions.iter().map(|q| q.id.as_str()).collect()
    }

    /// Sum of selected priority weights (the knapsack objective).
    pub fn total_priority(&self) -> u32 {
        self.selected_questions
            .iter()
            .map(|q| u32::from(q.priority()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_questions.is_empty()
    }

    /// True when the knapsack guard degraded the run to greedy selection.
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}
