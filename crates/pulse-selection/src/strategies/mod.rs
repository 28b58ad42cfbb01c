//! Interchangeable selection strategies behind one trait.

pub mod greedy;
pub mod knapsack;
pub mod time_balanced;
pub mod token_estimation;

use pulse_core::models::{Question, SelectionAlgorithm, SelectionFallback};
use pulse_tokens::DurationEstimator;

use crate::candidate::Candidate;

pub use greedy::GreedyStrategy;
pub use knapsack::KnapsackStrategy;
pub use time_balanced::TimeBalancedStrategy;
pub use token_estimation::TokenEstimationStrategy;

/// What a strategy chose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategyOutcome {
    /// Indices into the candidate slice, in selection order.
    pub selected: Vec<usize>,
    pub fallback: Option<SelectionFallback>,
}

impl StrategyOutcome {
    pub fn selected(selected: Vec<usize>) -> Self {
        Self {
            selected,
            fallback: None,
        }
    }
}

/// A selection strategy. Pure: equal inputs give equal outcomes.
pub trait SelectionStrategy: Send + Sync {
    /// Algorithm reported on results this strategy produces.
    fn algorithm(&self) -> SelectionAlgorithm;

    /// Duration this strategy budgets a question with.
    fn duration_of(&self, estimator: &DurationEstimator, question: &Question) -> f64 {
        estimator.estimate(question)
    }

    /// Choose candidates whose summed duration stays within `budget` seconds.
    fn select(&self, candidates: &[Candidate<'_>], budget: f64) -> StrategyOutcome;
}
