//! Grouping quality monitoring.

pub mod metrics;

pub use metrics::{assess_quality, GroupingQuality};
