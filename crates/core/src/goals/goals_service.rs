use std::sync::Arc;

use async_trait::async_trait;

use super::goals_model::GoalDraft;
use super::goals_traits::GoalServiceTrait;
use crate::cache::RequestCache;
use crate::constants::{PENDING_GOALS_KEY, SUMMARY_KEY};
use crate::errors::Result;
use crate::notifications::{NoOpNotificationSink, Notification, NotificationSink};
use weekgoals_api::GoalsApi;

/// Toast shown after a goal is created.
pub const GOAL_CREATED: &str = "Meta criada com sucesso.";

/// Toast shown when goal submission fails.
pub const GOAL_CREATE_FAILED: &str = "Não foi possível criar sua meta.";

#[derive(Clone)]
pub struct GoalService {
    api: Arc<dyn GoalsApi>,
    cache: Arc<RequestCache>,
    notifications: Arc<dyn NotificationSink>,
}

impl GoalService {
    pub fn new(api: Arc<dyn GoalsApi>, cache: Arc<RequestCache>) -> Self {
        Self {
            api,
            cache,
            notifications: Arc::new(NoOpNotificationSink),
        }
    }

    /// Sets the notification sink for this service.
    pub fn with_notifications(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.notifications = sink;
        self
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn create_goal(&self, draft: GoalDraft) -> Result<()> {
        // Invalid drafts never reach the network.
        let request = draft.validate()?;

        match self.api.create_goal(&request).await {
            Ok(()) => {
                log::debug!("goal '{}' created", request.title);
                self.notifications.notify(Notification::success(GOAL_CREATED));
                // Revalidate only after success is observed, never before.
                self.cache.invalidate(SUMMARY_KEY);
                self.cache.invalidate(PENDING_GOALS_KEY);
                Ok(())
            }
            Err(e) => {
                log::warn!("goal creation failed: {}", e);
                self.notifications
                    .notify(Notification::failure(GOAL_CREATE_FAILED));
                Err(e.into())
            }
        }
    }
}
