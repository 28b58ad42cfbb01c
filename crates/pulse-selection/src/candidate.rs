use pulse_core::models::Question;

/// A threshold-eligible question paired with the duration its strategy budgets with.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub question: &'a Question,
    pub duration: f64,
    pub priority: u8,
}

impl<'a> Candidate<'a> {
    pub fn new(question: &'a Question, duration: f64) -> Self {
        Self {
            question,
            duration,
            priority: question.priority(),
        }
    }
}

/// Indices of `candidates` ordered by priority descending.
/// The sort is stable, so equal priorities keep their input order.
pub fn greedy_order(candidates: &[Candidate<'_>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(candidates[i].priority));
    order
}

/// Sum of priority weights for a set of candidate indices.
pub fn total_priority(candidates: &[Candidate<'_>], selected: &[usize]) -> u32 {
    selected
        .iter()
        .map(|&i| u32::from(candidates[i].priority))
        .sum()
}
