//! Grouping algorithms: question similarity and group naming.

pub mod naming;
pub mod similarity;
