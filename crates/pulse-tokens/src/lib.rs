//! # pulse-tokens
//!
//! Token counting via `tiktoken-rs` (`cl100k_base`) with content-hash caching,
//! and the duration estimator that turns token counts into spoken call time.

pub mod counter;
pub mod duration;

pub use counter::TokenCounter;
pub use duration::{seconds_for_tokens, DurationEstimator};
