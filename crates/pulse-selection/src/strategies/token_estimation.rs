use pulse_core::models::{Question, SelectionAlgorithm};
use pulse_tokens::DurationEstimator;

use super::greedy::GreedyStrategy;
use super::{SelectionStrategy, StrategyOutcome};
use crate::candidate::Candidate;

/// Greedy selection where every duration comes from content length,
/// ignoring any preset `estimated_duration_seconds`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenEstimationStrategy;

impl SelectionStrategy for TokenEstimationStrategy {
    fn algorithm(&self) -> SelectionAlgorithm {
        SelectionAlgorithm::TokenEstimation
    }

    fn duration_of(&self, estimator: &DurationEstimator, question: &Question) -> f64 {
        estimator.estimate_from_content(question)
    }

    fn select(&self, candidates: &[Candidate<'_>], budget: f64) -> StrategyOutcome {
        GreedyStrategy.select(candidates, budget)
    }
}
