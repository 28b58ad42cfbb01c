// Single source of truth for all default values.

// --- Selection ---
pub const DEFAULT_MAX_DURATION_SECONDS: f64 = 90.0;
pub const DEFAULT_PRIORITY_THRESHOLD: u8 = 2;
pub const DEFAULT_DP_MAX_CAPACITY_SECONDS: u64 = 3_600; // 1 hour of call time
pub const DEFAULT_DP_MAX_CELLS: u64 = 4_000_000;

// --- Grouping ---
pub const DEFAULT_MAX_GROUP_SIZE: usize = 4;
pub const DEFAULT_MIN_COMPATIBILITY_SCORE: f64 = 0.6;
pub const DEFAULT_USE_SEMANTIC_SIMILARITY: bool = true;
pub const DEFAULT_PRESERVE_EXISTING_GROUPS: bool = true;

// --- Evaluation ---
pub const DEFAULT_SLA_MS: u64 = 500;
pub const DEFAULT_COUNT_TEXT_TOKENS: bool = false;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_PREVIEW_CACHE_CAPACITY: u64 = 1_000;
pub const DEFAULT_PREVIEW_CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
