use crate::models::{Constraints, EvaluationResult, Question};

/// Chooses which candidate questions fit a call budget.
///
/// Implementations are pure and stateless: identical inputs give identical output,
/// and a single instance may be shared across concurrent requests.
pub trait ISelector: Send + Sync {
    fn select(&self, candidates: &[Question], constraints: &Constraints) -> EvaluationResult;
}
