pub mod constraints;
pub mod evaluation_result;
pub mod grouping_options;
pub mod priority;
pub mod question;
pub mod topic_group;
pub mod trigger;

pub use constraints::{Constraints, SelectionAlgorithm};
pub use evaluation_result::{
    EvaluationResult, ExcludedQuestion, ExclusionReason, SelectionFallback,
};
pub use grouping_options::GroupingOptions;
pub use priority::{PriorityDistribution, PriorityTier, PriorityWeight};
pub use question::{Question, QuestionKind};
pub use topic_group::{
    ExistingGroup, GroupedQuestion, GroupingResult, TopicGroup, UngroupedQuestion,
};
pub use trigger::{TriggerCount, TriggerMatch, TriggerSummary};
