//! # pulse-evaluation
//!
//! Orchestrates one evaluation: raw constraints → validation → selection →
//! trigger summary → SLA check. The boundary layer (`PreviewService`) adds the
//! question store, a caller-owned preview cache, and bounded batch fan-out.

pub mod batch;
pub mod cache;
pub mod engine;
pub mod preview;
pub mod report;
pub mod tracing_setup;
pub mod triggers;
pub mod validation;

pub use batch::{run_batched, BatchOutcome};
pub use cache::PreviewCache;
pub use engine::{EvaluationEngine, EvaluationRequest};
pub use preview::{PreviewRequest, PreviewService};
pub use report::EvaluationReport;
pub use tracing_setup::init_tracing;
pub use triggers::summarize_triggers;
pub use validation::ConstraintsRequest;
