use async_trait::async_trait;

use crate::errors::Result;
use weekgoals_api::{PendingGoal, Summary};

/// Trait for summary read operations.
#[async_trait]
pub trait SummaryServiceTrait: Send + Sync {
    /// Fetches the weekly summary, served from cache when warm.
    async fn get_summary(&self) -> Result<Summary>;
}

/// Trait for pending goals read operations.
#[async_trait]
pub trait PendingGoalsServiceTrait: Send + Sync {
    /// Fetches the goals still pending this week, served from cache when warm.
    async fn get_pending_goals(&self) -> Result<Vec<PendingGoal>>;
}
