//! Golden-scenario and cross-strategy tests for SelectionEngine.

use pulse_core::models::{Constraints, ExclusionReason, Question, SelectionAlgorithm};
use pulse_core::traits::ISelector;
use pulse_selection::SelectionEngine;

fn q(id: &str, priority: u8, seconds: f64) -> Question {
    Question::new(id, format!("Question {id}"), priority)
        .unwrap()
        .with_duration(seconds)
}

fn five_questions() -> Vec<Question> {
    vec![
        q("1", 5, 10.0),
        q("2", 4, 15.0),
        q("3", 3, 20.0),
        q("4", 2, 25.0),
        q("5", 1, 30.0),
    ]
}

fn run(candidates: &[Question], budget: f64, threshold: u8, algo: SelectionAlgorithm) -> Vec<String> {
    let constraints = Constraints::new(budget, threshold, algo).unwrap();
    SelectionEngine::default()
        .select(candidates, &constraints)
        .selected_ids()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn golden_selection_scenarios() {
    let scenarios = test_fixtures::selection_scenarios();
    assert!(!scenarios.is_empty());

    let engine = SelectionEngine::default();
    for scenario in scenarios {
        let constraints = Constraints::new(
            scenario.max_duration_seconds,
            scenario.priority_threshold,
            scenario.algorithm,
        )
        .unwrap();
        let result = engine.select(&scenario.candidates, &constraints);

        assert_eq!(
            result.selected_ids(),
            scenario.expected_ids,
            "scenario: {}",
            scenario.name
        );
        assert!(
            (result.estimated_duration_seconds - scenario.expected_duration_seconds).abs() < 1e-9,
            "scenario: {} got {}s",
            scenario.name,
            result.estimated_duration_seconds
        );
    }
}

#[test]
fn greedy_budget_50_selects_three() {
    let result = SelectionEngine::default().select(
        &five_questions(),
        &Constraints::new(50.0, 1, SelectionAlgorithm::GreedyPriority).unwrap(),
    );
    assert_eq!(result.selected_ids(), vec!["1", "2", "3"]);
    assert_eq!(result.estimated_duration_seconds, 45.0);
    assert_eq!(result.priority_distribution.critical, 1);
    assert_eq!(result.priority_distribution.high, 1);
    assert_eq!(result.priority_distribution.medium, 1);
    assert_eq!(result.priority_distribution.low, 0);
    assert_eq!(result.algorithm, SelectionAlgorithm::GreedyPriority);
    assert!(!result.used_fallback());

    let excluded: Vec<&str> = result
        .excluded_questions
        .iter()
        .map(|e| e.question_id.as_str())
        .collect();
    assert_eq!(excluded, vec!["4", "5"]);
    assert!(result
        .excluded_questions
        .iter()
        .all(|e| e.reason == ExclusionReason::ExceedsRemainingBudget));
}

#[test]
fn budget_boundary_is_inclusive() {
    let ids = run(&five_questions(), 100.0, 1, SelectionAlgorithm::GreedyPriority);
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn every_algorithm_handles_empty_input() {
    for algo in SelectionAlgorithm::ALL {
        let result = SelectionEngine::default().select(&[], &Constraints::new(60.0, 1, algo).unwrap());
        assert!(result.is_empty());
        assert_eq!(result.estimated_duration_seconds, 0.0);
        assert_eq!(result.priority_distribution.total(), 0);
    }
}

#[test]
fn threshold_drops_low_priority_before_budgeting() {
    let ids = run(&five_questions(), 1000.0, 3, SelectionAlgorithm::GreedyPriority);
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn knapsack_never_scores_below_greedy() {
    let candidates = vec![
        q("a", 5, 40.0),
        q("b", 4, 25.0),
        q("c", 4, 25.0),
        q("d", 2, 10.0),
        q("e", 1, 5.0),
    ];
    let engine = SelectionEngine::default();
    for budget in [30.0, 45.0, 50.0, 55.0, 65.0, 80.0, 105.0] {
        let greedy = engine.select(
            &candidates,
            &Constraints::new(budget, 1, SelectionAlgorithm::GreedyPriority).unwrap(),
        );
        let knapsack = engine.select(
            &candidates,
            &Constraints::new(budget, 1, SelectionAlgorithm::DynamicProgramming).unwrap(),
        );
        assert!(
            knapsack.total_priority() >= greedy.total_priority(),
            "budget {budget}: knapsack {} < greedy {}",
            knapsack.total_priority(),
            greedy.total_priority()
        );
        assert!(knapsack.estimated_duration_seconds <= budget);
    }
}

#[test]
fn time_balanced_reaches_lower_tiers() {
    let candidates = vec![
        q("c1", 5, 30.0),
        q("c2", 5, 30.0),
        q("m1", 3, 10.0),
        q("l1", 1, 5.0),
    ];
    let greedy = run(&candidates, 60.0, 1, SelectionAlgorithm::GreedyPriority);
    assert_eq!(greedy, vec!["c1", "c2"]);

    let balanced = run(&candidates, 60.0, 1, SelectionAlgorithm::TimeBalanced);
    assert!(balanced.contains(&"m1".to_string()));
    assert!(balanced.contains(&"l1".to_string()));
    assert!(balanced.contains(&"c1".to_string()));
}

#[test]
fn token_estimation_uses_content_not_preset() {
    let candidates = vec![
        q("x", 5, 1.0).with_tokens(210),
        q("y", 4, 1.0).with_tokens(42),
    ];
    let constraints = Constraints::new(30.0, 1, SelectionAlgorithm::TokenEstimation).unwrap();
    let result = SelectionEngine::default().select(&candidates, &constraints);
    // 210 tokens is 50s of speech, more than the whole budget.
    assert_eq!(result.selected_ids(), vec!["y"]);
    assert!((result.estimated_duration_seconds - 10.0).abs() < 1e-9);
}

#[test]
fn missing_durations_count_as_zero() {
    let candidates = vec![
        Question::new("free", "No estimate", 2).unwrap(),
        q("paid", 3, 60.0),
    ];
    let ids = run(&candidates, 60.0, 1, SelectionAlgorithm::GreedyPriority);
    assert_eq!(ids, vec!["paid", "free"]);
}

#[test]
fn selection_is_deterministic() {
    let candidates = five_questions();
    for algo in SelectionAlgorithm::ALL {
        let first = run(&candidates, 55.0, 1, algo);
        for _ in 0..5 {
            assert_eq!(run(&candidates, 55.0, 1, algo), first, "{algo}");
        }
    }
}

#[test]
fn result_serializes_with_algorithm_name() {
    let result = SelectionEngine::default().select(
        &five_questions(),
        &Constraints::new(50.0, 1, SelectionAlgorithm::DynamicProgramming).unwrap(),
    );
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["algorithm"], "dynamic_programming");
    assert_eq!(json["selected_questions"].as_array().unwrap().len(), 3);
}
