use proptest::prelude::*;
use pulse_core::models::{Constraints, Question, SelectionAlgorithm};
use pulse_core::traits::ISelector;
use pulse_selection::SelectionEngine;

fn algorithm() -> impl Strategy<Value = SelectionAlgorithm> {
    prop::sample::select(SelectionAlgorithm::ALL.to_vec())
}

fn questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec((1u8..=5, 0u32..90, prop::option::of(0u32..400)), 0..20).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (priority, seconds, tokens))| {
                    let mut q = Question::new(format!("q{i}"), format!("Question {i}"), priority)
                        .unwrap()
                        .with_duration(f64::from(seconds) / 2.0);
                    q.estimated_tokens = tokens;
                    q
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn selection_respects_budget(candidates in questions(), budget in 30.0f64..300.0,
                                 threshold in 1u8..=5, algo in algorithm()) {
        let constraints = Constraints::new(budget, threshold, algo).unwrap();
        let result = SelectionEngine::default().select(&candidates, &constraints);
        prop_assert!(result.estimated_duration_seconds <= budget + 1e-9);
    }

    #[test]
    fn selection_respects_threshold(candidates in questions(), budget in 30.0f64..300.0,
                                    threshold in 1u8..=5, algo in algorithm()) {
        let constraints = Constraints::new(budget, threshold, algo).unwrap();
        let result = SelectionEngine::default().select(&candidates, &constraints);
        prop_assert!(result.selected_questions.iter().all(|q| q.priority() >= threshold));
    }

    #[test]
    fn selected_and_excluded_partition_input(candidates in questions(), budget in 30.0f64..300.0,
                                             algo in algorithm()) {
        let constraints = Constraints::new(budget, 2, algo).unwrap();
        let result = SelectionEngine::default().select(&candidates, &constraints);
        prop_assert_eq!(
            result.selected_questions.len() + result.excluded_questions.len(),
            candidates.len()
        );
        prop_assert_eq!(result.priority_distribution.total(), result.selected_questions.len());
    }

    #[test]
    fn knapsack_score_at_least_greedy(candidates in questions(), budget in 30.0f64..300.0) {
        let engine = SelectionEngine::default();
        let greedy = engine.select(
            &candidates,
            &Constraints::new(budget, 1, SelectionAlgorithm::GreedyPriority).unwrap(),
        );
        let knapsack = engine.select(
            &candidates,
            &Constraints::new(budget, 1, SelectionAlgorithm::DynamicProgramming).unwrap(),
        );
        prop_assert!(knapsack.total_priority() >= greedy.total_priority());
    }

    #[test]
    fn selection_is_deterministic(candidates in questions(), budget in 30.0f64..300.0,
                                  algo in algorithm()) {
        let constraints = Constraints::new(budget, 1, algo).unwrap();
        let engine = SelectionEngine::default();
        let first = engine.select(&candidates, &constraints);
        let second = engine.select(&candidates, &constraints);
        prop_assert_eq!(first, second);
    }
}
