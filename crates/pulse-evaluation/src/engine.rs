//! EvaluationEngine: validation → selection → trigger summary → SLA check.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use pulse_core::config::{EvaluationConfig, PulseConfig, SelectionConfig};
use pulse_core::errors::PulseResult;
use pulse_core::models::{
    Constraints, ExistingGroup, GroupingOptions, GroupingResult, Question, TriggerMatch,
};
use pulse_core::traits::{IGrouper, ISelector};
use pulse_grouping::{GroupingEngine, OptimalGrouping};
use pulse_selection::SelectionEngine;
use pulse_tokens::{DurationEstimator, TokenCounter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::report::EvaluationReport;
use crate::triggers::summarize_triggers;
use crate::validation::ConstraintsRequest;

/// One evaluation call as received from the request layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub candidates: Vec<Question>,
    #[serde(default)]
    pub constraints: ConstraintsRequest,
    #[serde(default)]
    pub triggers: Vec<TriggerMatch>,
    #[serde(default)]
    pub trigger_logs: Option<serde_json::Value>,
}

/// Composes the duration estimator, selector and grouper. Stateless per call.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
    selection_defaults: SelectionConfig,
    selector: SelectionEngine,
    grouper: GroupingEngine,
}

impl EvaluationEngine {
    /// Validate `config` and build the engines it describes.
    ///
    /// With `evaluation.count_text_tokens` the estimator counts `text` tokens
    /// (cl100k_base) for questions that carry no token count.
    pub fn from_config(config: &PulseConfig) -> PulseResult<Self> {
        config.validate()?;

        let estimator = if config.evaluation.count_text_tokens {
            let counter = TokenCounter::new(config.evaluation.token_cache_capacity)?;
            DurationEstimator::with_token_counter(Arc::new(counter))
        } else {
            DurationEstimator::new()
        };

        Ok(Self {
            config: config.evaluation.clone(),
            selection_defaults: config.selection.clone(),
            selector: SelectionEngine::new(estimator.clone(), &config.selection),
            grouper: GroupingEngine::new(estimator, &config.grouping),
        })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn selection_defaults(&self) -> &SelectionConfig {
        &self.selection_defaults
    }

    pub fn selector(&self) -> &SelectionEngine {
        &self.selector
    }

    pub fn grouper(&self) -> &GroupingEngine {
        &self.grouper
    }

    /// Parse the request's constraints and evaluate.
    ///
    /// Invalid constraints or questions fail before any selection runs.
    pub fn evaluate(&self, request: &EvaluationRequest) -> PulseResult<EvaluationReport> {
        let started = Instant::now();
        let constraints = request.constraints.to_constraints(&self.selection_defaults)?;
        self.run(
            started,
            &request.candidates,
            &constraints,
            &request.triggers,
            request.trigger_logs.clone(),
        )
    }

    /// Evaluate with already validated constraints and no trigger data.
    pub fn evaluate_constraints(
        &self,
        candidates: &[Question],
        constraints: &Constraints,
    ) -> PulseResult<EvaluationReport> {
        self.run(Instant::now(), candidates, constraints, &[], None)
    }

    fn run(
        &self,
        started: Instant,
        candidates: &[Question],
        constraints: &Constraints,
        triggers: &[TriggerMatch],
        trigger_logs: Option<serde_json::Value>,
    ) -> PulseResult<EvaluationReport> {
        for question in candidates {
            question.validate()?;
        }

        let result = self.selector.select(candidates, constraints);
        let trigger_summary = summarize_triggers(triggers, candidates, &result);
        debug!(
            matches = trigger_summary.total_matches,
            triggers = trigger_summary.distinct_triggers,
            "trigger summary built"
        );

        let elapsed = started.elapsed();
        let performance_valid = elapsed <= Duration::from_millis(self.config.sla_ms);
        let evaluation_time_ms = elapsed.as_secs_f64() * 1000.0;
        if !performance_valid {
            warn!(
                elapsed_ms = evaluation_time_ms,
                sla_ms = self.config.sla_ms,
                candidates = candidates.len(),
                algorithm = %constraints.algorithm(),
                "evaluation exceeded SLA"
            );
        }

        let report = EvaluationReport {
            evaluation_id: uuid::Uuid::new_v4().to_string(),
            evaluated_at: Utc::now(),
            result,
            evaluation_time_ms,
            performance_valid,
            trigger_summary,
            trigger_logs,
        };
        info!(
            evaluation_id = %report.evaluation_id,
            selected = report.result.selected_questions.len(),
            duration = report.result.estimated_duration_seconds,
            elapsed_ms = evaluation_time_ms,
            performance_valid,
            "evaluation complete"
        );
        Ok(report)
    }

    /// Group candidates. `None` uses the configured grouping options.
    pub fn group(
        &self,
        candidates: &[Question],
        options: Option<&GroupingOptions>,
        existing_groups: &[ExistingGroup],
    ) -> PulseResult<GroupingResult> {
        let options = options.unwrap_or(self.grouper.default_options());
        self.grouper.group(candidates, options, existing_groups)
    }

    pub fn find_optimal_grouping(
        &self,
        candidates: &[Question],
        max_call_duration: f64,
    ) -> PulseResult<OptimalGrouping> {
        self.grouper.find_optimal(candidates, max_call_duration)
    }
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        let config = PulseConfig::default();
        let estimator = DurationEstimator::new();
        Self {
            config: config.evaluation,
            selector: SelectionEngine::new(estimator.clone(), &config.selection),
            grouper: GroupingEngine::new(estimator, &config.grouping),
            selection_defaults: config.selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::errors::{PulseError, ValidationError};

    fn q(id: &str, priority: u8, seconds: f64) -> Question {
        Question::new(id, format!("Question {id}"), priority)
            .unwrap()
            .with_duration(seconds)
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = PulseConfig::default();
        config.grouping.max_group_size = 0;
        assert!(matches!(
            EvaluationEngine::from_config(&config),
            Err(PulseError::Config(_))
        ));
    }

    #[test]
    fn configured_defaults_fill_the_request() {
        let mut config = PulseConfig::default();
        config.selection.default_max_duration_seconds = 40.0;
        let engine = EvaluationEngine::from_config(&config).unwrap();

        let request = EvaluationRequest {
            candidates: vec![q("a", 5, 30.0), q("b", 4, 15.0)],
            ..Default::default()
        };
        let report = engine.evaluate(&request).unwrap();
        assert_eq!(report.result.selected_ids(), vec!["a"]);
    }

    #[test]
    fn invalid_question_fails_before_selection() {
        let mut bad = q("a", 3, 10.0);
        bad.estimated_duration_seconds = Some(f64::NAN);
        let request = EvaluationRequest {
            candidates: vec![bad],
            ..Default::default()
        };
        let err = EvaluationEngine::default().evaluate(&request).unwrap_err();
        assert!(matches!(err, PulseError::Validation(ValidationError::InvalidQuestion { .. })));
    }

    #[test]
    fn sla_breach_still_returns_result() {
        let mut engine = EvaluationEngine::default();
        engine.config.sla_ms = 0;
        let report = engine
            .evaluate_constraints(&[q("a", 5, 10.0)], &Constraints::default())
            .unwrap();
        // The result is still returned.
        assert_eq!(report.result.selected_ids(), vec!["a"]);
        assert!(report.evaluation_time_ms >= 0.0);
        assert!(!report.performance_valid);
    }

    #[test]
    fn group_uses_configured_options_by_default() {
        let engine = EvaluationEngine::default();
        let result = engine.group(&[q("a", 3, 10.0)], None, &[]).unwrap();
        assert_eq!(result.ungrouped.len(), 1);
    }
}
