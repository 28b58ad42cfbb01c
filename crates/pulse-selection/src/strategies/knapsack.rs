//! 0/1 knapsack over whole-second durations.
//!
//! Maximizes summed priority subject to summed duration <= budget.
//! Durations round up and capacity rounds down, so a table-feasible subset is
//! always feasible in real seconds. Backtracking takes an item whenever taking it
//! still reaches the optimum, which picks the optimal subset that comes first in
//! greedy order over the rounded table. Rounding can make that subset differ from
//! greedy's real-seconds choice at the same score, so the greedy subset is
//! compared afterwards and kept whenever it scores at least as high.

use pulse_core::config::{defaults, SelectionConfig};
use pulse_core::constants::{MAX_DP_CAPACITY_SECONDS, MAX_DP_CELLS};
use pulse_core::models::{SelectionAlgorithm, SelectionFallback};
use tracing::{debug, warn};

use super::greedy::{fill, GreedyStrategy};
use super::{SelectionStrategy, StrategyOutcome};
use crate::candidate::{greedy_order, total_priority, Candidate};

/// Knapsack strategy with a bound on table size.
#[derive(Debug, Clone, Copy)]
pub struct KnapsackStrategy {
    max_capacity_seconds: u64,
    max_cells: u64,
}

impl KnapsackStrategy {
    /// Bounds above the hard ceilings are clamped to them.
    pub fn new(max_capacity_seconds: u64, max_cells: u64) -> Self {
        Self {
            max_capacity_seconds: max_capacity_seconds.min(MAX_DP_CAPACITY_SECONDS),
            max_cells: max_cells.min(MAX_DP_CELLS),
        }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.dp_max_capacity_seconds, config.dp_max_cells)
    }

    fn guard_trips(&self, capacity: u64, cells: u64) -> bool {
        capacity > self.max_capacity_seconds || cells > self.max_cells
    }
}

impl Default for KnapsackStrategy {
    fn default() -> Self {
        Self::new(
            defaults::DEFAULT_DP_MAX_CAPACITY_SECONDS,
            defaults::DEFAULT_DP_MAX_CELLS,
        )
    }
}

impl SelectionStrategy for KnapsackStrategy {
    fn algorithm(&self) -> SelectionAlgorithm {
        SelectionAlgorithm::DynamicProgramming
    }

    fn select(&self, candidates: &[Candidate<'_>], budget: f64) -> StrategyOutcome {
        if candidates.is_empty() {
            return StrategyOutcome::default();
        }

        let capacity = budget.max(0.0).floor() as u64;
        let cells = (candidates.len() as u64 + 1).saturating_mul(capacity.saturating_add(1));

        if self.guard_trips(capacity, cells) {
            warn!(
                capacity,
                cells,
                max_capacity = self.max_capacity_seconds,
                max_cells = self.max_cells,
                "knapsack capacity guard triggered, falling back to greedy"
            );
            let mut outcome = GreedyStrategy.select(candidates, budget);
            outcome.fallback = Some(SelectionFallback {
                requested: SelectionAlgorithm::DynamicProgramming,
                used: SelectionAlgorithm::GreedyPriority,
                capacity_seconds: capacity,
                table_cells: cells,
            });
            return outcome;
        }

        let order = greedy_order(candidates);
        let optimal = solve(candidates, &order, capacity as usize);

        // Rounding durations up can cost a subset that fits in real seconds.
        // Greedy's subset wins on equal score.
        let (greedy, _) = fill(candidates, order.iter().copied(), budget, 0.0);
        let optimal_score = total_priority(candidates, &optimal);
        let greedy_score = total_priority(candidates, &greedy);
        debug!(
            capacity,
            optimal_score, greedy_score, "knapsack table solved"
        );

        if greedy_score >= optimal_score {
            StrategyOutcome::selected(greedy)
        } else {
            StrategyOutcome::selected(optimal)
        }
    }
}

/// Solve the table over candidates taken in `order`.
/// Returns the chosen candidate indices in `order` sequence.
fn solve(candidates: &[Candidate<'_>], order: &[usize], capacity: usize) -> Vec<usize> {
    let n = order.len();
    let width = capacity + 1;
    let weight = |k: usize| -> usize {
        let d = candidates[order[k]].duration.max(0.0).ceil();
        if d > capacity as f64 {
            usize::MAX
        } else {
            d as usize
        }
    };
    let value = |k: usize| u32::from(candidates[order[k]].priority);

    // Suffix table: best[k][c] is the best score using order[k..] within c seconds.
    let mut best = vec![0u32; (n + 1) * width];
    for k in (0..n).rev() {
        let (w, v) = (weight(k), value(k));
        for c in 0..width {
            let skip = best[(k + 1) * width + c];
            best[k * width + c] = if w <= c {
                skip.max(best[(k + 1) * width + c - w] + v)
            } else {
                skip
            };
        }
    }

    let mut selected = Vec::new();
    let mut c = capacity;
    for k in 0..n {
        let w = weight(k);
        if w <= c && best[(k + 1) * width + c - w] + value(k) == best[k * width + c] {
            selected.push(order[k]);
            c -= w;
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::models::Question;

    fn questions(rows: &[(u8, f64)]) -> Vec<Question> {
        rows.iter()
            .enumerate()
            .map(|(i, &(p, d))| {
                Question::new(format!("{}", i + 1), "text", p)
                    .unwrap()
                    .with_duration(d)
            })
            .collect()
    }

    fn candidates(qs: &[Question]) -> Vec<Candidate<'_>> {
        qs.iter()
            .map(|q| Candidate::new(q, q.estimated_duration_seconds.unwrap()))
            .collect()
    }

    #[test]
    fn beats_greedy_when_greedy_wastes_budget() {
        // Greedy takes the 5 (40s) and nothing else fits: score 5.
        // Optimal takes both 4s (25s + 25s): score 8.
        let qs = questions(&[(5, 40.0), (4, 25.0), (4, 25.0)]);
        let cands = candidates(&qs);
        let greedy = GreedyStrategy.select(&cands, 50.0);
        let optimal = KnapsackStrategy::default().select(&cands, 50.0);
        assert_eq!(total_priority(&cands, &greedy.selected), 5);
        assert_eq!(total_priority(&cands, &optimal.selected), 8);
        assert_eq!(optimal.selected, vec![1, 2]);
    }

    #[test]
    fn ties_resolve_like_greedy() {
        // Three equal items, room for two: the first two in input order win.
        let qs = questions(&[(3, 20.0), (3, 20.0), (3, 20.0)]);
        let out = KnapsackStrategy::default().select(&candidates(&qs), 45.0);
        assert_eq!(out.selected, vec![0, 1]);
    }

    #[test]
    fn fractional_ties_keep_the_greedy_subset() {
        // Greedy fits 10.5 + 39.5 = 50 in real seconds. The table rounds that to 51
        // and finds 11 + 39 = 50 instead, at the same score of 8.
        let qs = questions(&[(5, 10.5), (3, 39.5), (3, 39.0)]);
        let cands = candidates(&qs);
        let greedy = GreedyStrategy.select(&cands, 50.0);
        let optimal = KnapsackStrategy::default().select(&cands, 50.0);
        assert_eq!(greedy.selected, vec![0, 1]);
        assert_eq!(optimal.selected, greedy.selected);
    }

    #[test]
    fn bounds_are_clamped_to_ceilings() {
        let qs = questions(&[(5, 10.0)]);
        let strategy = KnapsackStrategy::new(u64::MAX, u64::MAX);
        let out = strategy.select(&candidates(&qs), 1e12);
        let fallback = out.fallback.expect("guard should trip");
        assert_eq!(fallback.used, SelectionAlgorithm::GreedyPriority);
        assert_eq!(out.selected, vec![0]);
    }

    #[test]
    fn fractional_durations_never_lose_to_greedy() {
        // 10.5 + 39.5 = 50 fits exactly, but rounds up to 11 + 40 = 51 in the table.
        let qs = questions(&[(5, 10.5), (4, 39.5)]);
        let cands = candidates(&qs);
        let out = KnapsackStrategy::default().select(&cands, 50.0);
        assert_eq!(out.selected, vec![0, 1]);
    }

    #[test]
    fn guard_falls_back_to_greedy() {
        let qs = questions(&[(5, 10.0), (4, 15.0)]);
        let strategy = KnapsackStrategy::new(40, 1_000);
        let out = strategy.select(&candidates(&qs), 50.0);
        let fallback = out.fallback.expect("guard should trip");
        assert_eq!(fallback.used, SelectionAlgorithm::GreedyPriority);
        assert_eq!(fallback.capacity_seconds, 50);
        assert_eq!(out.selected, vec![0, 1]);
    }

    #[test]
    fn cell_bound_also_trips_guard() {
        let qs = questions(&[(5, 10.0), (4, 15.0), (3, 5.0)]);
        // 4 rows * 61 columns = 244 cells.
        let strategy = KnapsackStrategy::new(3_600, 200);
        let out = strategy.select(&candidates(&qs), 60.0);
        assert_eq!(out.fallback.map(|f| f.table_cells), Some(244));
    }

    #[test]
    fn oversized_items_are_skipped() {
        let qs = questions(&[(5, 500.0), (1, 5.0)]);
        let out = KnapsackStrategy::default().select(&candidates(&qs), 60.0);
        assert_eq!(out.selected, vec![1]);
    }
}
