//! GroupingEngine: implements IGrouper, validates options before the pipeline runs.

use pulse_core::config::GroupingConfig;
use pulse_core::errors::PulseResult;
use pulse_core::models::{ExistingGroup, GroupingOptions, GroupingResult, Question};
use pulse_core::traits::IGrouper;
use pulse_tokens::DurationEstimator;
use tracing::info;

use crate::optimizer::{self, OptimalGrouping};
use crate::pipeline;

/// Stateless topic grouper. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    estimator: DurationEstimator,
    default_options: GroupingOptions,
}

impl GroupingEngine {
    pub fn new(estimator: DurationEstimator, config: &GroupingConfig) -> Self {
        Self {
            estimator,
            default_options: GroupingOptions::from(config),
        }
    }

    /// Options used when the caller supplies none.
    pub fn default_options(&self) -> &GroupingOptions {
        &self.default_options
    }

    pub fn estimator(&self) -> &DurationEstimator {
        &self.estimator
    }

    /// Run the configuration search over the fixed profiles.
    pub fn find_optimal(
        &self,
        candidates: &[Question],
        max_call_duration: f64,
    ) -> PulseResult<OptimalGrouping> {
        optimizer::find_optimal(self, candidates, max_call_duration)
    }
}

impl IGrouper for GroupingEngine {
    fn group(
        &self,
        candidates: &[Question],
        options: &GroupingOptions,
        existing_groups: &[ExistingGroup],
    ) -> PulseResult<GroupingResult> {
        options.validate()?;
        for question in candidates {
            question.validate()?;
        }

        let result = pipeline::run_pipeline(candidates, options, existing_groups, &self.estimator);

        info!(
            candidates = candidates.len(),
            groups = result.groups.len(),
            ungrouped = result.ungrouped.len(),
            max_group_size = options.max_group_size,
            min_compatibility = options.min_compatibility_score,
            "grouping complete"
        );
        Ok(result)
    }
}
