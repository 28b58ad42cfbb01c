/// Pulse engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spoken tokens per second used to turn token counts into call time.
pub const TOKENS_PER_SECOND_SPEECH: f64 = 4.2;

/// Hard ceilings on the knapsack guard. Configured bounds may not exceed them.
pub const MAX_DP_CAPACITY_SECONDS: u64 = 86_400;
pub const MAX_DP_CELLS: u64 = 50_000_000;

/// Lowest accepted call budget in seconds.
pub const MIN_MAX_DURATION_SECONDS: f64 = 30.0;

/// Priority weight bounds.
pub const MIN_PRIORITY_WEIGHT: u8 = 1;
pub const MAX_PRIORITY_WEIGHT: u8 = 5;

/// Topic used when a question carries neither `topic_category` nor `category`.
pub const DEFAULT_TOPIC: &str = "general";

/// Reason attached to questions the grouper could not place.
pub const UNGROUPED_REASON: &str =
    "Low compatibility with existing groups or insufficient similar questions";

/// Divisor for a group's priority boost (`mean priority / 3`).
pub const PRIORITY_BOOST_DIVISOR: f64 = 3.0;

/// Target group size used by the balance score of the configuration search.
pub const TARGET_GROUP_SIZE: f64 = 3.0;
