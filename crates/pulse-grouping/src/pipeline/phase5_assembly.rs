//! Phase 5: Build a TopicGroup from a chunk of bucket members.

use pulse_core::constants::PRIORITY_BOOST_DIVISOR;
use pulse_core::models::{GroupedQuestion, Question, TopicGroup};

use crate::algorithms::naming::{group_id, group_name};
use crate::algorithms::similarity::SimilarityMatrix;

/// `max(1.0, mean(priority) / 3.0)`. 1.0 for no members.
pub fn priority_boost(priorities: impl IntoIterator<Item = u8>) -> f64 {
    let (sum, count) = priorities
        .into_iter()
        .fold((0u32, 0u32), |(s, c), p| (s + u32::from(p), c + 1));
    if count == 0 {
        return 1.0;
    }
    (f64::from(sum) / f64::from(count) / PRIORITY_BOOST_DIVISOR).max(1.0)
}

/// `chunk` holds bucket-local indices into `questions`, `durations` and `matrix`.
pub fn assemble_group(
    topic: &str,
    ordinal: usize,
    chunk: &[usize],
    questions: &[&Question],
    durations: &[f64],
    matrix: &SimilarityMatrix,
) -> TopicGroup {
    let members: Vec<GroupedQuestion> = chunk
        .iter()
        .map(|&local| GroupedQuestion {
            question: questions[local].clone(),
            compatibility_score: matrix.mean_to_others(local, chunk),
            estimated_duration: durations[local],
        })
        .collect();

    TopicGroup {
        group_id: group_id(topic, members.iter().map(|m| m.question.id.as_str())),
        group_name: group_name(topic, ordinal),
        topic_category: topic.to_string(),
        total_duration: members.iter().map(|m| m.estimated_duration).sum(),
        average_compatibility: matrix.mean_pairwise(chunk),
        priority_boost: priority_boost(members.iter().map(|m| m.question.priority())),
        questions: members,
        existing: false,
    }
}
