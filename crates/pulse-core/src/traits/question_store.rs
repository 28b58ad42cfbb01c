use crate::errors::PulseResult;
use crate::models::{ExistingGroup, Question};

/// Filter for listing candidate questions within a tenant scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Business/tenant scope supplied by the auth layer.
    pub scope: String,
    pub topic_category: Option<String>,
    /// Only return questions with these ids, when non-empty.
    pub ids: Vec<String>,
    pub active_only: bool,
}

impl QuestionFilter {
    pub fn for_scope(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            active_only: true,
            ..Self::default()
        }
    }
}

/// Read access to the external question store.
///
/// Injected into the boundary layer; the selection and grouping engines never
/// touch it.
pub trait IQuestionStore: Send + Sync {
    fn get(&self, scope: &str, id: &str) -> PulseResult<Question>;
    fn list(&self, filter: &QuestionFilter) -> PulseResult<Vec<Question>>;
    fn existing_groups(&self, scope: &str) -> PulseResult<Vec<ExistingGroup>>;
}
