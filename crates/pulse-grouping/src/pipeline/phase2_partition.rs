//! Phase 2: Partition unassigned candidates by effective topic.
//!
//! Buckets keep first-appearance order, and members keep input order.

use pulse_core::models::Question;

#[derive(Debug, Clone, PartialEq)]
pub struct TopicBucket {
    pub topic: String,
    /// Indices into the candidate slice.
    pub members: Vec<usize>,
}

pub fn partition_by_topic(candidates: &[Question], assigned: &[bool]) -> Vec<TopicBucket> {
    let mut buckets: Vec<TopicBucket> = Vec::new();
    for (i, question) in candidates.iter().enumerate() {
        if assigned.get(i).copied().unwrap_or(false) {
            continue;
        }
        let topic = question.effective_topic();
        match buckets.iter_mut().find(|b| b.topic == topic) {
            Some(bucket) => bucket.members.push(i),
            None => buckets.push(TopicBucket {
                topic: topic.to_string(),
                members: vec![i],
            }),
        }
    }
    buckets
}
