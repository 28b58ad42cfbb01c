//! # pulse-grouping
//!
//! 5-phase topic grouping pipeline: existing-group assignment → topic partition →
//! similarity clustering → chunking → group assembly.
//! Quality metrics (coverage, compatibility, balance) drive the configuration search.

pub mod algorithms;
pub mod engine;
pub mod monitoring;
pub mod optimizer;
pub mod pipeline;

pub use engine::GroupingEngine;
pub use monitoring::{assess_quality, GroupingQuality};
pub use optimizer::{OptimalGrouping, GROUPING_PROFILES};
