//! SelectionEngine: implements ISelector, dispatches to one of four strategies.

use pulse_core::config::SelectionConfig;
use pulse_core::models::{
    Constraints, EvaluationResult, ExcludedQuestion, ExclusionReason, PriorityDistribution,
    Question, SelectionAlgorithm,
};
use pulse_core::traits::ISelector;
use pulse_tokens::DurationEstimator;
use tracing::{debug, info};

use crate::candidate::Candidate;
use crate::strategies::{
    GreedyStrategy, KnapsackStrategy, SelectionStrategy, TimeBalancedStrategy,
    TokenEstimationStrategy,
};

/// Stateless selector. Safe to share across concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    estimator: DurationEstimator,
    greedy: GreedyStrategy,
    knapsack: KnapsackStrategy,
    time_balanced: TimeBalancedStrategy,
    token_estimation: TokenEstimationStrategy,
}

impl SelectionEngine {
    pub fn new(estimator: DurationEstimator, config: &SelectionConfig) -> Self {
        Self {
            estimator,
            knapsack: KnapsackStrategy::from_config(config),
            ..Self::default()
        }
    }

    pub fn estimator(&self) -> &DurationEstimator {
        &self.estimator
    }

    /// The strategy registered for an algorithm.
    pub fn strategy(&self, algorithm: SelectionAlgorithm) -> &dyn SelectionStrategy {
        match algorithm {
            SelectionAlgorithm::GreedyPriority => &self.greedy,
            SelectionAlgorithm::DynamicProgramming => &self.knapsack,
            SelectionAlgorithm::TimeBalanced => &self.time_balanced,
            SelectionAlgorithm::TokenEstimation => &self.token_estimation,
        }
    }
}

impl ISelector for SelectionEngine {
    fn select(&self, candidates: &[Question], constraints: &Constraints) -> EvaluationResult {
        let requested = constraints.algorithm();
        let threshold = constraints.priority_threshold();
        let budget = constraints.max_duration_seconds();
        let strategy = self.strategy(requested);

        // Threshold filter. `positions` maps candidate slots back to input order.
        let mut positions = Vec::with_capacity(candidates.len());
        let mut eligible = Vec::with_capacity(candidates.len());
        let mut excluded: Vec<(usize, ExcludedQuestion)> = Vec::new();
        for (pos, question) in candidates.iter().enumerate() {
            if question.priority_weight >= threshold {
                positions.push(pos);
                eligible.push(Candidate::new(
                    question,
                    strategy.duration_of(&self.estimator, question),
                ));
            } else {
                excluded.push((
                    pos,
                    exclusion(question, ExclusionReason::BelowPriorityThreshold),
                ));
            }
        }
        debug!(
            candidates = candidates.len(),
            eligible = eligible.len(),
            threshold = %threshold,
            "priority threshold applied"
        );

        let outcome = strategy.select(&eligible, budget);

        let mut chosen = vec![false; eligible.len()];
        for &i in &outcome.selected {
            chosen[i] = true;
        }
        for (i, cand) in eligible.iter().enumerate() {
            if !chosen[i] {
                excluded.push((
                    positions[i],
                    exclusion(cand.question, ExclusionReason::ExceedsRemainingBudget),
                ));
            }
        }
        excluded.sort_by_key(|(pos, _)| *pos);

        let selected_questions: Vec<Question> = outcome
            .selected
            .iter()
            .map(|&i| eligible[i].question.clone())
            .collect();
        let estimated_duration_seconds: f64 =
            outcome.selected.iter().map(|&i| eligible[i].duration).sum();
        let priority_distribution =
            PriorityDistribution::from_weights(selected_questions.iter().map(|q| q.priority_weight));
        let algorithm = outcome.fallback.map_or(strategy.algorithm(), |f| f.used);

        info!(
            algorithm = %algorithm,
            requested = %requested,
            selected = selected_questions.len(),
            excluded = excluded.len(),
            duration = estimated_duration_seconds,
            budget,
            "selection complete"
        );

        EvaluationResult {
            selected_questions,
            excluded_questions: excluded.into_iter().map(|(_, e)| e).collect(),
            estimated_duration_seconds,
            priority_distribution,
            algorithm,
            fallback: outcome.fallback,
        }
    }
}

fn exclusion(question: &Question, reason: ExclusionReason) -> ExcludedQuestion {
    ExcludedQuestion {
        question_id: question.id.clone(),
        priority_weight: question.priority_weight,
        reason,
    }
}
