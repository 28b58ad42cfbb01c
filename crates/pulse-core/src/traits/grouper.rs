use crate::errors::PulseResult;
use crate::models::{ExistingGroup, GroupingOptions, GroupingResult, Question};

/// Partitions candidate questions into topic-coherent groups.
pub trait IGrouper: Send + Sync {
    /// Every candidate ends up in exactly one group or in `ungrouped`.
    fn group(
        &self,
        candidates: &[Question],
        options: &GroupingOptions,
        existing_groups: &[ExistingGroup],
    ) -> PulseResult<GroupingResult>;
}
