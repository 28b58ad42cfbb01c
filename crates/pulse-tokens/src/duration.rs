//! Duration estimator: spoken seconds from explicit durations or token counts.

use std::fmt;
use std::sync::Arc;

use pulse_core::constants::TOKENS_PER_SECOND_SPEECH;
use pulse_core::models::Question;

use crate::counter::TokenCounter;

/// Spoken seconds for a token count (`tokens / 4.2`).
pub fn seconds_for_tokens(tokens: u64) -> f64 {
    tokens as f64 / TOKENS_PER_SECOND_SPEECH
}

/// Converts question content size into spoken duration.
///
/// Pure: no I/O and no failure modes. A question with neither an explicit duration
/// nor a token count estimates to 0 unless the estimator carries a token counter,
/// in which case the tokens of `text` are counted.
#[derive(Clone, Default)]
pub struct DurationEstimator {
    counter: Option<Arc<TokenCounter>>,
}

impl DurationEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimator that counts `text` tokens for questions without `estimated_tokens`.
    pub fn with_token_counter(counter: Arc<TokenCounter>) -> Self {
        Self {
            counter: Some(counter),
        }
    }

    pub fn counts_text(&self) -> bool {
        self.counter.is_some()
    }

    /// The explicit duration when present, otherwise the content estimate.
    pub fn estimate(&self, question: &Question) -> f64 {
        match question.estimated_duration_seconds {
            Some(seconds) => seconds.max(0.0),
            None => self.estimate_from_content(question),
        }
    }

    /// Content estimate only; ignores `estimated_duration_seconds`.
    pub fn estimate_from_content(&self, question: &Question) -> f64 {
        let tokens = question
            .estimated_tokens
            .map(u64::from)
            .or_else(|| {
                self.counter
                    .as_ref()
                    .map(|c| c.count_cached(&question.text) as u64)
            })
            .unwrap_or(0);
        seconds_for_tokens(tokens)
    }
}

impl fmt::Debug for DurationEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurationEstimator")
            .field("counts_text", &self.counts_text())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new("q", "Was your issue resolved today?", 3).unwrap()
    }

    #[test]
    fn explicit_duration_is_returned_unchanged() {
        let q = question().with_duration(12.5).with_tokens(420);
        assert_eq!(DurationEstimator::new().estimate(&q), 12.5);
    }

    #[test]
    fn tokens_convert_at_speech_rate() {
        let q = question().with_tokens(42);
        let secs = DurationEstimator::new().estimate(&q);
        assert!((secs - 10.0).abs() < 1e-9);
    }

    #[test]
    fn content_estimate_ignores_explicit_duration() {
        let q = question().with_duration(99.0).with_tokens(21);
        let secs = DurationEstimator::new().estimate_from_content(&q);
        assert!((secs - 5.0).abs() < 1e-9);
    }

    #[test]
    fn absent_fields_estimate_to_zero() {
        assert_eq!(DurationEstimator::new().estimate(&question()), 0.0);
    }

    #[test]
    fn counter_fills_in_missing_tokens() {
        let counter = Arc::new(TokenCounter::new(16).unwrap());
        let estimator = DurationEstimator::with_token_counter(counter.clone());
        let q = question();
        let expected = seconds_for_tokens(counter.count(&q.text) as u64);
        assert!(estimator.estimate(&q) > 0.0);
        assert!((estimator.estimate(&q) - expected).abs() < 1e-9);

        // Explicit token counts still win over counting.
        let q = question().with_tokens(0);
        assert_eq!(estimator.estimate(&q), 0.0);
    }
}
