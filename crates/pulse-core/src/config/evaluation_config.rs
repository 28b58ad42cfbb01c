use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestrator and boundary-layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Soft latency target; slower evaluations are flagged, never discarded.
    pub sla_ms: u64,
    /// Count `text` tokens when a question has no `estimated_tokens`.
    pub count_text_tokens: bool,
    /// Items processed concurrently per batch in bulk previews.
    pub batch_size: usize,
    pub preview_cache_capacity: u64,
    pub preview_cache_ttl_secs: u64,
    pub token_cache_capacity: u64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            sla_ms: defaults::DEFAULT_SLA_MS,
            count_text_tokens: defaults::DEFAULT_COUNT_TEXT_TOKENS,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            preview_cache_capacity: defaults::DEFAULT_PREVIEW_CACHE_CAPACITY,
            preview_cache_ttl_secs: defaults::DEFAULT_PREVIEW_CACHE_TTL_SECS,
            token_cache_capacity: defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
        }
    }
}
