//! Configuration search: run the grouper under fixed (size, threshold) profiles
//! in parallel and keep the best-scoring run.

use pulse_core::errors::{GroupingError, PulseResult};
use pulse_core::models::{GroupingOptions, GroupingResult, Question, TopicGroup, UngroupedQuestion};
use pulse_core::traits::IGrouper;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::engine::GroupingEngine;
use crate::monitoring::{assess_quality, GroupingQuality};

/// (max_group_size, min_compatibility_score) profiles, in tie-break order.
pub const GROUPING_PROFILES: [(usize, f64); 3] = [(3, 0.7), (4, 0.6), (5, 0.5)];

type ProfileRun = (GroupingOptions, GroupingResult, GroupingQuality);

/// Best grouping found by the configuration search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalGrouping {
    pub groups: Vec<TopicGroup>,
    pub ungrouped: Vec<UngroupedQuestion>,
    pub max_questions_per_call: usize,
    pub estimated_coverage: f64,
    pub profile: GroupingOptions,
    pub quality: GroupingQuality,
}

pub fn find_optimal(
    engine: &GroupingEngine,
    candidates: &[Question],
    max_call_duration: f64,
) -> PulseResult<OptimalGrouping> {
    if candidates.is_empty() {
        return Err(GroupingError::EmptyCandidates.into());
    }
    if !max_call_duration.is_finite() || max_call_duration <= 0.0 {
        return Err(GroupingError::InvalidCallDuration {
            value: max_call_duration,
        }
        .into());
    }

    // Parallel runs; collect keeps profile order.
    let mut runs = GROUPING_PROFILES
        .par_iter()
        .map(|&(size, threshold)| -> PulseResult<ProfileRun> {
            let options = GroupingOptions::profile(size, threshold);
            let result = engine.group(candidates, &options, &[])?;
            let quality = assess_quality(&result);
            Ok((options, result, quality))
        })
        .collect::<PulseResult<Vec<_>>>()?;

    let mut best: Option<usize> = None;
    for (i, (options, _, quality)) in runs.iter().enumerate() {
        debug!(
            max_group_size = options.max_group_size,
            min_compatibility = options.min_compatibility_score,
            score = quality.score,
            "profile scored"
        );
        if best.map_or(true, |b| quality.score > runs[b].2.score) {
            best = Some(i);
        }
    }
    let best = best.unwrap_or(0);
    let (profile, result, quality) = runs.swap_remove(best);

    let max_questions_per_call = max_questions_per_call(engine, candidates, max_call_duration);

    info!(
        max_group_size = profile.max_group_size,
        min_compatibility = profile.min_compatibility_score,
        score = quality.score,
        coverage = quality.coverage,
        max_questions_per_call,
        "optimal grouping selected"
    );

    Ok(OptimalGrouping {
        groups: result.groups,
        ungrouped: result.ungrouped,
        max_questions_per_call,
        estimated_coverage: quality.coverage,
        profile,
        quality,
    })
}

/// `floor(max_call_duration / mean duration)`; every candidate when the mean is zero.
fn max_questions_per_call(
    engine: &GroupingEngine,
    candidates: &[Question],
    max_call_duration: f64,
) -> usize {
    let total: f64 = candidates.iter().map(|q| engine.estimator().estimate(q)).sum();
    let mean = total / candidates.len() as f64;
    if mean <= f64::EPSILON {
        candidates.len()
    } else {
        (max_call_duration / mean).floor() as usize
    }
}
