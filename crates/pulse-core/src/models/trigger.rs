use serde::{Deserialize, Serialize};

/// A trigger that made a question eligible. Produced by the external trigger evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerMatch {
    pub question_id: String,
    pub trigger_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_name: Option<String>,
    #[serde(default)]
    pub matched_conditions: Vec<String>,
}

/// Per-trigger counts over one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerCount {
    pub trigger_id: String,
    /// Candidates this trigger made eligible.
    pub matched_questions: usize,
    /// Of those, how many were selected.
    pub selected_questions: usize,
}

/// Summary of trigger activity attached to an evaluation report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSummary {
    pub total_matches: usize,
    pub distinct_triggers: usize,
    /// Candidates with at least one trigger match.
    pub triggered_questions: usize,
    /// Ordered by first appearance in the match list.
    pub per_trigger: Vec<TriggerCount>,
}
