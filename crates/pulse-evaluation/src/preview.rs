//! Boundary-layer preview service.
//!
//! Loads candidates from the injected question store, answers from the preview
//! cache when it can, and fans bulk previews out through the batch runner.

use std::sync::Arc;

use pulse_core::errors::PulseResult;
use pulse_core::models::{GroupingOptions, GroupingResult, Question};
use pulse_core::traits::{IQuestionStore, QuestionFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::batch::{run_batched, BatchOutcome};
use crate::cache::PreviewCache;
use crate::engine::EvaluationEngine;
use crate::report::EvaluationReport;
use crate::validation::ConstraintsRequest;

/// Preview the selection for a tenant scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    pub scope: String,
    /// Restrict candidates to these ids; all active questions when empty.
    #[serde(default)]
    pub question_ids: Vec<String>,
    #[serde(default)]
    pub topic_category: Option<String>,
    #[serde(default)]
    pub constraints: ConstraintsRequest,
}

impl PreviewRequest {
    fn filter(&self) -> QuestionFilter {
        QuestionFilter {
            ids: self.question_ids.clone(),
            topic_category: self.topic_category.clone(),
            ..QuestionFilter::for_scope(self.scope.clone())
        }
    }
}

#[derive(Clone)]
pub struct PreviewService {
    store: Arc<dyn IQuestionStore>,
    engine: Arc<EvaluationEngine>,
    cache: Arc<PreviewCache>,
}

impl PreviewService {
    pub fn new(
        store: Arc<dyn IQuestionStore>,
        engine: Arc<EvaluationEngine>,
        cache: Arc<PreviewCache>,
    ) -> Self {
        Self {
            store,
            engine,
            cache,
        }
    }

    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    pub fn engine(&self) -> &EvaluationEngine {
        &self.engine
    }

    fn load_candidates(&self, filter: &QuestionFilter) -> PulseResult<Vec<Question>> {
        let candidates = self.store.list(filter)?;
        debug!(scope = %filter.scope, count = candidates.len(), "candidates loaded");
        Ok(candidates)
    }

    /// Evaluate one preview, reusing a cached report for identical inputs.
    pub fn preview(&self, request: &PreviewRequest) -> PulseResult<EvaluationReport> {
        let constraints = request
            .constraints
            .to_constraints(self.engine.selection_defaults())?;
        let candidates = self.load_candidates(&request.filter())?;

        let key = PreviewCache::fingerprint(&candidates, &constraints)?;
        if let Some(report) = self.cache.get(&key) {
            debug!(scope = %request.scope, "preview cache hit");
            return Ok(report);
        }

        let report = self.engine.evaluate_constraints(&candidates, &constraints)?;
        self.cache.put(key, report.clone());
        Ok(report)
    }

    /// Run many previews with bounded concurrency (`evaluation.batch_size`).
    pub async fn preview_many(&self, requests: Vec<PreviewRequest>) -> BatchOutcome<EvaluationReport> {
        let total = requests.len();
        let batch_size = self.engine.config().batch_size;
        let service = self.clone();
        let outcome = run_batched(requests, batch_size, move |request| service.preview(&request)).await;
        info!(
            total,
            succeeded = outcome.succeeded(),
            failed = outcome.failed(),
            batch_size,
            "bulk preview complete"
        );
        outcome
    }

    /// Group a scope's questions, honouring its persisted groups.
    pub fn group_scope(
        &self,
        scope: &str,
        options: Option<&GroupingOptions>,
    ) -> PulseResult<GroupingResult> {
        let candidates = self.load_candidates(&QuestionFilter::for_scope(scope))?;
        let existing = self.store.existing_groups(scope)?;
        self.engine.group(&candidates, options, &existing)
    }
}

impl std::fmt::Debug for PreviewService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewService")
            .field("engine", &self.engine)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
