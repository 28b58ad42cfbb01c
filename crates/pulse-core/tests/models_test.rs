use pulse_core::models::*;

fn sample_json() -> &'static str {
    r#"{
        "id": "q-1",
        "text": "How satisfied were you with the agent?",
        "priority_weight": 5,
        "estimated_tokens": 42,
        "topic_category": "service_quality",
        "keywords": ["agent", "satisfaction"],
        "kind": {"type": "rating", "max_rating": 5}
    }"#
}

#[test]
fn question_deserializes_with_tagged_kind() {
    let q: Question = serde_json::from_str(sample_json()).unwrap();
    assert_eq!(q.id, "q-1");
    assert_eq!(q.priority_weight, PriorityWeight::CRITICAL);
    assert_eq!(q.estimated_duration_seconds, None);
    assert_eq!(q.estimated_tokens, Some(42));
    assert_eq!(q.kind, QuestionKind::Rating { max_rating: 5 });
    assert_eq!(q.effective_topic(), "service_quality");
}

#[test]
fn question_without_kind_defaults_to_text() {
    let q: Question =
        serde_json::from_str(r#"{"id":"q","text":"Anything else?","priority_weight":1}"#).unwrap();
    assert_eq!(q.kind, QuestionKind::Text { max_length: None });
    assert!(q.keywords.is_empty());
}

#[test]
fn question_rejects_out_of_range_priority() {
    let json = r#"{"id":"q","text":"t","priority_weight":9}"#;
    assert!(serde_json::from_str::<Question>(json).is_err());
}

#[test]
fn question_rejects_single_choice_multiple_choice() {
    let json = r#"{"id":"q","text":"t","priority_weight":3,
        "kind":{"type":"multiple_choice","choices":["yes"]}}"#;
    assert!(serde_json::from_str::<Question>(json).is_err());
}

#[test]
fn checkbox_max_selections_must_fit_choices() {
    let kind = QuestionKind::Checkbox {
        choices: vec!["a".into(), "b".into()],
        max_selections: Some(3),
    };
    assert!(kind.validate().is_err());
}

#[test]
fn question_serde_roundtrip_preserves_kind() {
    let q = Question::new("q-7", "Rate us from 1 to 10", 4)
        .unwrap()
        .with_kind(QuestionKind::scale(1, 10).unwrap())
        .with_duration(6.5)
        .with_category("nps");
    let json = serde_json::to_string(&q).unwrap();
    let back: Question = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
    assert!(json.contains(r#""type":"scale""#));
}

#[test]
fn empty_evaluation_result_has_zero_distribution() {
    let r = EvaluationResult::empty(SelectionAlgorithm::GreedyPriority);
    assert!(r.is_empty());
    assert_eq!(r.estimated_duration_seconds, 0.0);
    assert_eq!(r.priority_distribution, PriorityDistribution::default());
    assert_eq!(r.total_priority(), 0);
    assert!(!r.used_fallback());
}

#[test]
fn grouping_result_counts_grouped_and_ungrouped() {
    let q = Question::new("a", "text", 3).unwrap();
    let result = GroupingResult {
        groups: vec![TopicGroup {
            group_id: "g".into(),
            group_name: "General 1".into(),
            topic_category: "general".into(),
            questions: vec![GroupedQuestion {
                question: q.clone(),
                compatibility_score: 1.0,
                estimated_duration: 0.0,
            }],
            total_duration: 0.0,
            average_compatibility: 1.0,
            priority_boost: 1.0,
            existing: false,
        }],
        ungrouped: vec![UngroupedQuestion {
            question: q,
            reason: "x".into(),
        }],
    };
    assert_eq!(result.grouped_count(), 1);
    assert_eq!(result.total_count(), 2);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn priority_weight_accepts_exactly_one_to_five(v in any::<u8>()) {
            prop_assert_eq!(PriorityWeight::new(v).is_ok(), (1..=5).contains(&v));
        }

        #[test]
        fn distribution_total_matches_input_len(weights in proptest::collection::vec(1u8..=5, 0..40)) {
            let dist = PriorityDistribution::from_weights(
                weights.iter().map(|&w| PriorityWeight::new(w).unwrap()),
            );
            prop_assert_eq!(dist.total(), weights.len());
        }
    }
}
