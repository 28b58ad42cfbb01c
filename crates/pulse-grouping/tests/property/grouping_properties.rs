use std::collections::HashMap;

use proptest::prelude::*;
use pulse_core::models::{GroupingOptions, Question};
use pulse_core::traits::IGrouper;
use pulse_grouping::{assess_quality, GroupingEngine};

const TOPICS: [&str; 3] = ["service", "pricing", "delivery"];
const WORDS: [&str; 6] = ["quality", "speed", "price", "staff", "order", "value"];

fn questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(
        (
            1u8..=5,
            prop::option::of(0usize..3),
            prop::collection::vec(0usize..6, 0..4),
            prop::collection::vec(0usize..6, 1..6),
            0u32..60,
        ),
        0..24,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (priority, topic, keywords, words, seconds))| {
                let text = words.iter().map(|&w| WORDS[w]).collect::<Vec<_>>().join(" ");
                let mut q = Question::new(format!("q{i}"), text, priority)
                    .unwrap()
                    .with_duration(f64::from(seconds))
                    .with_keywords(keywords.iter().map(|&k| WORDS[k]));
                if let Some(t) = topic {
                    q = q.with_category(TOPICS[t]);
                }
                q
            })
            .collect()
    })
}

fn options() -> impl Strategy<Value = GroupingOptions> {
    (1usize..6, 0.0f64..=1.0, any::<bool>()).prop_map(|(size, score, semantic)| GroupingOptions {
        max_group_size: size,
        min_compatibility_score: score,
        use_semantic_similarity: semantic,
        preserve_existing_groups: true,
    })
}

proptest! {
    #[test]
    fn every_candidate_appears_exactly_once(candidates in questions(), opts in options()) {
        let result = GroupingEngine::default().group(&candidates, &opts, &[]).unwrap();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for group in &result.groups {
            for q in &group.questions {
                *seen.entry(q.question.id.as_str()).or_default() += 1;
            }
        }
        for u in &result.ungrouped {
            *seen.entry(u.question.id.as_str()).or_default() += 1;
        }
        prop_assert_eq!(seen.len(), candidates.len());
        prop_assert!(seen.values().all(|&count| count == 1));
    }

    #[test]
    fn groups_respect_max_size(candidates in questions(), opts in options()) {
        let result = GroupingEngine::default().group(&candidates, &opts, &[]).unwrap();
        prop_assert!(result.groups.iter().all(|g| !g.is_empty() && g.len() <= opts.max_group_size));
    }

    #[test]
    fn scores_stay_in_unit_range(candidates in questions(), opts in options()) {
        let result = GroupingEngine::default().group(&candidates, &opts, &[]).unwrap();
        for group in &result.groups {
            prop_assert!((0.0..=1.0).contains(&group.average_compatibility));
            prop_assert!(group.priority_boost >= 1.0);
            for q in &group.questions {
                prop_assert!((0.0..=1.0).contains(&q.compatibility_score));
            }
        }
        let quality = assess_quality(&result);
        for value in [quality.coverage, quality.average_compatibility, quality.balance, quality.score] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn optimal_search_is_deterministic(candidates in questions()) {
        prop_assume!(!candidates.is_empty());
        let engine = GroupingEngine::default();
        let first = engine.find_optimal(&candidates, 120.0).unwrap();
        let second = engine.find_optimal(&candidates, 120.0).unwrap();
        prop_assert_eq!(first, second);
    }
}
