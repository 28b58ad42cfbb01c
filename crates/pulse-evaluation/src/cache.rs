//! Caller-owned preview cache.
//!
//! `moka::sync::Cache` with capacity and TTL from `EvaluationConfig`, keyed by a
//! blake3 fingerprint of the candidates and constraints. Tracks hits/misses.
//! The engines never see it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;
use pulse_core::config::EvaluationConfig;
use pulse_core::errors::PulseResult;
use pulse_core::models::{Constraints, Question};

use crate::report::EvaluationReport;

pub struct PreviewCache {
    cache: Cache<String, EvaluationReport>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PreviewCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &EvaluationConfig) -> Self {
        Self::new(
            config.preview_cache_capacity,
            Duration::from_secs(config.preview_cache_ttl_secs),
        )
    }

    /// Content key: blake3 over the serialized candidates and constraints.
    pub fn fingerprint(candidates: &[Question], constraints: &Constraints) -> PulseResult<String> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&serde_json::to_vec(candidates)?);
        hasher.update(&serde_json::to_vec(constraints)?);
        Ok(hasher.finalize().to_hex().to_string())
    }

    pub fn get(&self, key: &str) -> Option<EvaluationReport> {
        match self.cache.get(key) {
            Some(report) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(report)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn put(&self, key: String, report: EvaluationReport) {
        self.cache.insert(key, report);
    }

    pub fn evict(&self, key: &str) {
        self.cache.invalidate(key);
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits() + self.misses();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::from_config(&EvaluationConfig::default())
    }
}

impl std::fmt::Debug for PreviewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewCache")
            .field("entries", &self.entry_count())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
