//! Time-balanced selection.
//!
//! Each priority tier present gets a slice of the budget proportional to its
//! weight (a tier of 5 gets five parts, a tier of 1 gets one), so no single tier
//! can take the whole call. Tiers fill greedily inside their slice, then one
//! final greedy pass spends whatever is left across all remaining candidates.

use pulse_core::models::SelectionAlgorithm;

use super::greedy::fill;
use super::{SelectionStrategy, StrategyOutcome};
use crate::candidate::{greedy_order, Candidate};

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeBalancedStrategy;

impl SelectionStrategy for TimeBalancedStrategy {
    fn algorithm(&self) -> SelectionAlgorithm {
        SelectionAlgorithm::TimeBalanced
    }

    fn select(&self, candidates: &[Candidate<'_>], budget: f64) -> StrategyOutcome {
        let mut tiers: Vec<u8> = candidates.iter().map(|c| c.priority).collect();
        tiers.sort_unstable_by(|a, b| b.cmp(a));
        tiers.dedup();

        let total_weight: u32 = tiers.iter().map(|&t| u32::from(t)).sum();
        if total_weight == 0 {
            return StrategyOutcome::default();
        }

        let mut taken = vec![false; candidates.len()];
        let mut selected = Vec::new();
        let mut used = 0.0;

        for tier in tiers {
            let sub_budget = budget * f64::from(tier) / f64::from(total_weight);
            let members = (0..candidates.len()).filter(|&i| candidates[i].priority == tier);
            // Slice applies on top of the running total, capped at the budget.
            let cap = (used + sub_budget).min(budget);
            let (picked, new_used) = fill(candidates, members, cap, used);
            for &i in &picked {
                taken[i] = true;
            }
            selected.extend(picked);
            used = new_used;
        }

        let leftovers = greedy_order(candidates).into_iter().filter(|&i| !taken[i]);
        let (extra, _) = fill(candidates, leftovers, budget, used);
        selected.extend(extra);

        StrategyOutcome::selected(selected)
    }
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
    fn lower_tier_keeps_its_share() {
        // Tiers 5 and 1: sub-budgets 50s and 10s of a 60s call.
        // Greedy would spend all 60s on the critical questions.
        let qs = questions(&[(5, 20.0), (5, 20.0), (5, 20.0), (1, 10.0)]);
        let cands = candidates(&qs);
        let out = TimeBalancedStrategy.select(&cands, 60.0);
        assert!(out.selected.contains(&3), "optional tier should get a slot");
        assert_eq!(out.selected, vec![0, 1, 3]);
    }

    #[test]
    fn remainder_pass_uses_leftover_time() {
        // Tier 5 slice is 50s: the 30s question fits, the 25s one would reach 55s.
        // Tier 1 slice is 10s and spends 5s. The remainder pass then has 25s left
        // and picks up the 25s critical question.
        let qs = questions(&[(5, 30.0), (5, 25.0), (1, 5.0)]);
        let out = TimeBalancedStrategy.select(&candidates(&qs), 60.0);
        assert_eq!(out.selected, vec![0, 2, 1]);
    }

    #[test]
    fn single_tier_behaves_like_greedy() {
        let qs = questions(&[(3, 30.0), (3, 30.0), (3, 20.0)]);
        let out = TimeBalancedStrategy.select(&candidates(&qs), 50.0);
        assert_eq!(out.selected, vec![0, 2]);
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(TimeBalancedStrategy.select(&[], 90.0).selected.is_empty());
    }
}
