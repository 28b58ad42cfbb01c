use proptest::prelude::*;
use pulse_core::models::Question;
use pulse_tokens::{seconds_for_tokens, DurationEstimator};

proptest! {
    #[test]
    fn estimate_is_never_negative(tokens in proptest::option::of(0u32..100_000),
                                  duration in proptest::option::of(0.0f64..10_000.0)) {
        let mut q = Question::new("q", "text", 3).unwrap();
        q.estimated_tokens = tokens;
        q.estimated_duration_seconds = duration;
        let est = DurationEstimator::new();
        prop_assert!(est.estimate(&q) >= 0.0);
        prop_assert!(est.estimate_from_content(&q) >= 0.0);
    }

    #[test]
    fn estimate_is_monotonic_in_tokens(a in 0u64..50_000, b in 0u64..50_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(seconds_for_tokens(lo) <= seconds_for_tokens(hi));
    }

    #[test]
    fn explicit_duration_wins(tokens in 0u32..10_000, duration in 0.0f64..600.0) {
        let q = Question::new("q", "text", 3)
            .unwrap()
            .with_tokens(tokens)
            .with_duration(duration);
        prop_assert_eq!(DurationEstimator::new().estimate(&q), duration);
    }
}
