//! Phase 4: Split oversized clusters into chunks of at most `max_group_size`.
//!
//! Oversized clusters are stably sorted by priority descending first, so the
//! overflow chunk holds the lowest priorities.

use std::cmp::Reverse;

pub fn split_cluster(
    cluster: &[usize],
    priority: impl Fn(usize) -> u8,
    max_group_size: usize,
) -> Vec<Vec<usize>> {
    let size = max_group_size.max(1);
    if cluster.len() <= size {
        return vec![cluster.to_vec()];
    }
    let mut sorted = cluster.to_vec();
    sorted.sort_by_key(|&i| Reverse(priority(i)));
    sorted.chunks(size).map(<[usize]>::to_vec).collect()
}
