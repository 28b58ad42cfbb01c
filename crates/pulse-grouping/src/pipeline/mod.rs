//! 5-phase grouping pipeline orchestrator.
//!
//! Phase 1: Existing groups → Phase 2: Topic partition → Phase 3: Clustering →
//! Phase 4: Chunking → Phase 5: Assembly

pub mod phase1_existing;
pub mod phase2_partition;
pub mod phase3_clustering;
pub mod phase4_chunking;
pub mod phase5_assembly;

use pulse_core::constants::UNGROUPED_REASON;
use pulse_core::models::{ExistingGroup, GroupingOptions, GroupingResult, Question, UngroupedQuestion};
use pulse_tokens::DurationEstimator;
use tracing::debug;

use crate::algorithms::similarity::SimilarityMatrix;

/// Run the grouping pipeline over `candidates`.
///
/// Every candidate lands in exactly one group or in `ungrouped`.
/// Options are assumed valid; the engine checks them first.
pub fn run_pipeline(
    candidates: &[Question],
    options: &GroupingOptions,
    existing_groups: &[ExistingGroup],
    estimator: &DurationEstimator,
) -> GroupingResult {
    let durations: Vec<f64> = candidates.iter().map(|q| estimator.estimate(q)).collect();

    // Phase 1: Existing groups.
    let existing = if options.preserve_existing_groups && !existing_groups.is_empty() {
        phase1_existing::assign_existing(candidates, &durations, existing_groups, options)
    } else {
        phase1_existing::ExistingAssignment::none(candidates.len())
    };
    debug!(
        groups = existing.groups.len(),
        assigned = existing.assigned.iter().filter(|a| **a).count(),
        "Phase 1: existing groups"
    );

    let mut groups = existing.groups;
    let mut ungrouped: Vec<usize> = Vec::new();

    // Phase 2: Partition.
    let buckets = phase2_partition::partition_by_topic(candidates, &existing.assigned);
    debug!(buckets = buckets.len(), "Phase 2: topic partition");

    for bucket in &buckets {
        let questions: Vec<&Question> = bucket.members.iter().map(|&i| &candidates[i]).collect();
        let bucket_durations: Vec<f64> = bucket.members.iter().map(|&i| durations[i]).collect();

        // Phase 3: Clustering.
        let (matrix, clusters) = if options.use_semantic_similarity {
            let matrix = SimilarityMatrix::build(&questions);
            let clusters =
                phase3_clustering::cluster_greedy(&matrix, options.min_compatibility_score);
            (matrix, clusters)
        } else {
            let matrix = SimilarityMatrix::uniform(questions.len());
            (matrix, vec![(0..questions.len()).collect()])
        };
        debug!(
            topic = %bucket.topic,
            members = bucket.members.len(),
            clusters = clusters.len(),
            "Phase 3: clustering"
        );

        let mut ordinal = 0usize;
        for cluster in clusters {
            if options.use_semantic_similarity && cluster.len() < 2 {
                ungrouped.extend(cluster.iter().map(|&local| bucket.members[local]));
                continue;
            }

            // Phase 4: Chunking.
            let chunks = phase4_chunking::split_cluster(
                &cluster,
                |local| questions[local].priority(),
                options.max_group_size,
            );

            // Phase 5: Assembly.
            for chunk in chunks {
                ordinal += 1;
                groups.push(phase5_assembly::assemble_group(
                    &bucket.topic,
                    ordinal,
                    &chunk,
                    &questions,
                    &bucket_durations,
                    &matrix,
                ));
            }
        }
    }

    ungrouped.sort_unstable();
    let ungrouped = ungrouped
        .into_iter()
        .map(|i| UngroupedQuestion {
            question: candidates[i].clone(),
            reason: UNGROUPED_REASON.to_string(),
        })
        .collect();

    GroupingResult { groups, ungrouped }
}
