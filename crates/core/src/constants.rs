//! Shared constants for the weekgoals client.

/// Cache key for the weekly summary.
pub const SUMMARY_KEY: &str = "/summary";

/// Cache key for the pending goals list.
pub const PENDING_GOALS_KEY: &str = "/pending-goals";

/// Minimum accepted title length for a new goal.
pub const MIN_TITLE_LEN: usize = 3;

/// Maximum accepted description length for a new goal.
pub const MAX_DESCRIPTION_LEN: usize = 300;

/// Valid range for the desired weekly frequency.
pub const MIN_WEEKLY_FREQUENCY: i32 = 1;
pub const MAX_WEEKLY_FREQUENCY: i32 = 7;

/// Frequency pre-selected when the creation form opens.
pub const DEFAULT_WEEKLY_FREQUENCY: i32 = 3;
