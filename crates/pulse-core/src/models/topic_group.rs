use serde::{Deserialize, Serialize};

use super::question::Question;

/// A question placed in a group, annotated with its fit to the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedQuestion {
    pub question: Question,
    /// Compatibility with the rest of the group, in [0, 1].
    pub compatibility_score: f64,
    pub estimated_duration: f64,
}

/// A topic-coherent group of questions.
///
/// Invariant: `questions.len() <= max_group_size` of the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub group_id: String,
    pub group_name: String,
    pub topic_category: String,
    pub questions: Vec<GroupedQuestion>,
    pub total_duration: f64,
    /// Mean pairwise similarity within the group; 1.0 for singletons.
    pub average_compatibility: f64,
    /// `max(1.0, mean(priority) / 3.0)`.
    pub priority_boost: f64,
    /// True when this group was supplied by the caller as a persisted group.
    #[serde(default)]
    pub existing: bool,
}

impl TopicGroup {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_ids(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.question.id.as_str()).collect()
    }
}

/// A candidate that could not be placed in any group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UngroupedQuestion {
    pub question: Question,
    pub reason: String,
}

/// A previously persisted group, loaded by the caller and passed in as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingGroup {
    pub group_id: String,
    pub group_name: String,
    pub topic_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Historical average duration of the group's questions.
    pub average_duration_seconds: f64,
    /// Ids of questions already persisted in the group.
    #[serde(default)]
    pub member_ids: Vec<String>,
}

/// Output of one grouping call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingResult {
    pub groups: Vec<TopicGroup>,
    pub ungrouped: Vec<UngroupedQuestion>,
}

impl GroupingResult {
    /// Number of candidates placed into groups.
    pub fn grouped_count(&self) -> usize {
        self.groups.iter().map(TopicGroup::len).sum()
    }

    /// Grouped plus ungrouped; equals the candidate count.
    pub fn total_count(&self) -> usize {
        self.grouped_count() + self.ungrouped.len()
    }
}
