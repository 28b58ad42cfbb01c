use pulse_core::models::SelectionAlgorithm;

use super::{SelectionStrategy, StrategyOutcome};
use crate::candidate::{greedy_order, Candidate};

/// Priority-descending scan that keeps going past rejected questions,
/// so a later, shorter question can still fill the remaining time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl SelectionStrategy for GreedyStrategy {
    fn algorithm(&self) -> SelectionAlgorithm {
        SelectionAlgorithm::GreedyPriority
    }

    fn select(&self, candidates: &[Candidate<'_>], budget: f64) -> StrategyOutcome {
        let order = greedy_order(candidates);
        let (selected, _) = fill(candidates, order, budget, 0.0);
        StrategyOutcome::selected(selected)
    }
}

/// Walk `order`, taking every candidate that still fits.
/// Returns the taken indices and the new running total.
pub fn fill(
    candidates: &[Candidate<'_>],
    order: impl IntoIterator<Item = usize>,
    budget: f64,
    mut used: f64,
) -> (Vec<usize>, f64) {
    let mut selected = Vec::new();
    for i in order {
        let duration = candidates[i].duration;
        if used + duration <= budget {
            used += duration;
            selected.push(i);
        }
    }
    (selected, used)
}
