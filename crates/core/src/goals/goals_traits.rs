use async_trait::async_trait;

use super::goals_model::GoalDraft;
use crate::errors::Result;

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Validates and submits a new goal, then revalidates dependent caches.
    async fn create_goal(&self, draft: GoalDraft) -> Result<()>;
}
