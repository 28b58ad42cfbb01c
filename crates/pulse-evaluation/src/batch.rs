//! Bounded batch fan-out.
//!
//! Items run in fixed-size batches: every item of a batch runs concurrently on
//! the blocking pool, and the batch is joined before the next one starts.
//! Per-item failures are collected, never short-circuit the run.

use std::sync::Arc;

use pulse_core::errors::{PulseError, PulseResult};
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Per-item results in input order.
#[derive(Debug)]
pub struct BatchOutcome<R> {
    pub results: Vec<PulseResult<R>>,
}

impl<R> BatchOutcome<R> {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// `(input index, error)` for every failed item.
    pub fn failures(&self) -> Vec<(usize, &PulseError)> {
        self.results
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
            .collect()
    }
}

/// Run `work` over `items`, at most `batch_size` at a time.
pub async fn run_batched<T, R, F>(items: Vec<T>, batch_size: usize, work: F) -> BatchOutcome<R>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> PulseResult<R> + Send + Sync + 'static,
{
    let total = items.len();
    let batch_size = batch_size.max(1);
    let work = Arc::new(work);
    let mut slots: Vec<Option<PulseResult<R>>> = (0..total).map(|_| None).collect();

    let mut pending = items.into_iter().enumerate().peekable();
    let mut batch_no = 0usize;
    while pending.peek().is_some() {
        let mut set = JoinSet::new();
        for (idx, item) in pending.by_ref().take(batch_size) {
            let work = Arc::clone(&work);
            set.spawn_blocking(move || (idx, work(item)));
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((idx, result)) => slots[idx] = Some(result),
                Err(e) => warn!(%e, batch = batch_no, "batch task failed"),
            }
        }
        debug!(batch = batch_no, "batch joined");
        batch_no += 1;
    }

    let results = slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| {
                Err(PulseError::TaskFailed {
                    reason: "task panicked or was cancelled".to_string(),
                })
            })
        })
        .collect();
    BatchOutcome { results }
}
