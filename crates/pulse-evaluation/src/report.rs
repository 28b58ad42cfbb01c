use chrono::{DateTime, Utc};
use pulse_core::models::{EvaluationResult, TriggerSummary};
use serde::{Deserialize, Serialize};

/// Everything one evaluation returns to the request layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub evaluation_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub result: EvaluationResult,
    pub evaluation_time_ms: f64,
    /// False when the evaluation exceeded the SLA. The result is still valid.
    pub performance_valid: bool,
    pub trigger_summary: TriggerSummary,
    /// Caller data passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_logs: Option<serde_json::Value>,
}
