//! Trigger summary over one evaluation.

use std::collections::HashSet;

use pulse_core::models::{EvaluationResult, Question, TriggerCount, TriggerMatch, TriggerSummary};

/// Summarize trigger matches for the evaluated candidates.
///
/// Matches for questions outside `candidates` are ignored. A question matched
/// twice by one trigger counts once for that trigger.
pub fn summarize_triggers(
    matches: &[TriggerMatch],
    candidates: &[Question],
    result: &EvaluationResult,
) -> TriggerSummary {
    let candidate_ids: HashSet<&str> = candidates.iter().map(|q| q.id.as_str()).collect();
    let selected_ids: HashSet<&str> = result.selected_ids().into_iter().collect();

    let mut total_matches = 0usize;
    let mut triggered: HashSet<&str> = HashSet::new();
    let mut seen_pairs: HashSet<(&str, &str)> = HashSet::new();
    let mut per_trigger: Vec<TriggerCount> = Vec::new();

    for m in matches {
        let question_id = m.question_id.as_str();
        if !candidate_ids.contains(question_id) {
            continue;
        }
        total_matches += 1;
        triggered.insert(question_id);

        let pos = match per_trigger.iter().position(|c| c.trigger_id == m.trigger_id) {
            Some(pos) => pos,
            None => {
                per_trigger.push(TriggerCount {
                    trigger_id: m.trigger_id.clone(),
                    matched_questions: 0,
                    selected_questions: 0,
                });
                per_trigger.len() - 1
            }
        };
        if seen_pairs.insert((m.trigger_id.as_str(), question_id)) {
            per_trigger[pos].matched_questions += 1;
            if selected_ids.contains(question_id) {
                per_trigger[pos].selected_questions += 1;
            }
        }
    }

    TriggerSummary {
        total_matches,
        distinct_triggers: per_trigger.len(),
        triggered_questions: triggered.len(),
        per_trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::SelectionAlgorithm;

    fn trigger(question_id: &str, trigger_id: &str) -> TriggerMatch {
        TriggerMatch {
            question_id: question_id.into(),
            trigger_id: trigger_id.into(),
            trigger_name: None,
            matched_conditions: vec![],
        }
    }

    #[test]
    fn counts_matches_and_selections_per_trigger() {
        let a = Question::new("a", "t", 5).unwrap();
        let b = Question::new("b", "t", 3).unwrap();
        let mut result = EvaluationResult::empty(SelectionAlgorithm::GreedyPriority);
        result.selected_questions.push(a.clone());

        let matches = vec![
            trigger("a", "t-checkout"),
            trigger("b", "t-checkout"),
            trigger("a", "t-vip"),
            trigger("a", "t-vip"),
            trigger("ghost", "t-vip"),
        ];
        let summary = summarize_triggers(&matches, &[a, b], &result);

        assert_eq!(summary.total_matches, 4);
        assert_eq!(summary.distinct_triggers, 2);
        assert_eq!(summary.triggered_questions, 2);
        assert_eq!(summary.per_trigger[0].trigger_id, "t-checkout");
        assert_eq!(summary.per_trigger[0].matched_questions, 2);
        assert_eq!(summary.per_trigger[0].selected_questions, 1);
        assert_eq!(summary.per_trigger[1].matched_questions, 1);
        assert_eq!(summary.per_trigger[1].selected_questions, 1);
    }

    #[test]
    fn no_matches_give_empty_summary() {
        let result = EvaluationResult::empty(SelectionAlgorithm::GreedyPriority);
        assert_eq!(summarize_triggers(&[], &[], &result), TriggerSummary::default());
    }
}
