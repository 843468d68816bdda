//! Default values shared by goals and the tracker.

/// Current amount used when a new goal does not supply one
pub const DEFAULT_CURRENT_AMOUNT: f64 = 0.0;

/// Prefix for ids handed out by the sequential generator
pub const SEQUENTIAL_ID_PREFIX: &str = "goal";

/// Progress reported for goals whose target is zero
pub const ZERO_TARGET_PROGRESS: i64 = 0;
