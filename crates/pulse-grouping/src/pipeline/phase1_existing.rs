//! Phase 1: Assign candidates to caller-supplied persisted groups.
//!
//! A candidate joins a group when its topic matches and its blended
//! compatibility reaches the threshold. Candidates are taken in input order
//! until the group is full; persisted members that are not candidates count
//! against `max_group_size`.

use std::collections::HashSet;

use pulse_core::models::{ExistingGroup, GroupedQuestion, GroupingOptions, Question, TopicGroup};

use super::phase5_assembly::priority_boost;
use crate::algorithms::similarity::existing_group_compatibility;

/// Groups that received candidates, plus which candidates are taken.
#[derive(Debug, Clone)]
pub struct ExistingAssignment {
    pub groups: Vec<TopicGroup>,
    /// Parallel to the candidate slice.
    pub assigned: Vec<bool>,
}

impl ExistingAssignment {
    pub fn none(candidate_count: usize) -> Self {
        Self {
            groups: Vec::new(),
            assigned: vec![false; candidate_count],
        }
    }
}

pub fn assign_existing(
    candidates: &[Question],
    durations: &[f64],
    existing_groups: &[ExistingGroup],
    options: &GroupingOptions,
) -> ExistingAssignment {
    let mut out = ExistingAssignment::none(candidates.len());
    let candidate_ids: HashSet<&str> = candidates.iter().map(|q| q.id.as_str()).collect();

    for group in existing_groups {
        let persisted = group
            .member_ids
            .iter()
            .filter(|id| !candidate_ids.contains(id.as_str()))
            .count();
        let mut capacity = options.max_group_size.saturating_sub(persisted);

        let mut members: Vec<(usize, f64)> = Vec::new();
        for (i, question) in candidates.iter().enumerate() {
            if capacity == 0 {
                break;
            }
            if out.assigned[i] || question.effective_topic() != group.topic_category {
                continue;
            }
            let score = existing_group_compatibility(question, durations[i], group);
            if score >= options.min_compatibility_score {
                out.assigned[i] = true;
                members.push((i, score));
                capacity -= 1;
            }
        }

        if !members.is_empty() {
            out.groups.push(existing_group(group, &members, candidates, durations));
        }
    }
    out
}

fn existing_group(
    group: &ExistingGroup,
    members: &[(usize, f64)],
    candidates: &[Question],
    durations: &[f64],
) -> TopicGroup {
    let questions: Vec<GroupedQuestion> = members
        .iter()
        .map(|&(i, score)| GroupedQuestion {
            question: candidates[i].clone(),
            compatibility_score: score,
            estimated_duration: durations[i],
        })
        .collect();
    let average_compatibility =
        members.iter().map(|(_, s)| s).sum::<f64>() / members.len() as f64;

    TopicGroup {
        group_id: group.group_id.clone(),
        group_name: group.group_name.clone(),
        topic_category: group.topic_category.clone(),
        total_duration: questions.iter().map(|q| q.estimated_duration).sum(),
        average_compatibility,
        priority_boost: priority_boost(questions.iter().map(|q| q.question.priority())),
        questions,
        existing: true,
    }
}
