//! # pulse-selection
//!
//! Chooses which candidate questions fit a voice-call budget.
//!
//! ## Architecture
//!
//! ```text
//! SelectionEngine (ISelector)
//! ├── threshold filter (drops candidates below priority_threshold)
//! ├── DurationEstimator (explicit duration or tokens / 4.2)
//! └── SelectionStrategy
//!     ├── GreedyStrategy          (stable priority order, full scan)
//!     ├── KnapsackStrategy        (0/1 DP, capacity guard → greedy)
//!     ├── TimeBalancedStrategy    (per-tier sub-budgets + remainder pass)
//!     └── TokenEstimationStrategy (greedy over token-derived durations)
//! ```

pub mod candidate;
pub mod engine;
pub mod strategies;

pub use candidate::Candidate;
pub use engine::SelectionEngine;
pub use strategies::{SelectionStrategy, StrategyOutcome};
