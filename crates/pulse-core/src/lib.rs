//! # pulse-core
//!
//! Foundation crate for the Pulse question engine.
//! Defines the question model, selection/grouping result types, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PulseConfig;
pub use errors::{PulseError, PulseResult, ValidationError};
pub use models::{
    Constraints, EvaluationResult, PriorityTier, PriorityWeight, Question, QuestionKind,
    SelectionAlgorithm, TopicGroup, UngroupedQuestion,
};
