//! Shared service wiring for the CLI commands.

use std::sync::Arc;

use weekgoals_api::{GoalsApi, GoalsApiClient};
use weekgoals_core::cache::RequestCache;
use weekgoals_core::goals::{GoalService, GoalServiceTrait};
use weekgoals_core::notifications::NotificationSink;
use weekgoals_core::summary::{
    PendingGoalsService, PendingGoalsServiceTrait, SummaryService, SummaryServiceTrait,
};

use crate::config::Config;
use crate::toast::TerminalNotificationSink;

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub summary_service: Arc<dyn SummaryServiceTrait>,
    pub pending_goals_service: Arc<dyn PendingGoalsServiceTrait>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let api: Arc<dyn GoalsApi> = Arc::new(GoalsApiClient::new(config.api_base_url.clone()));
        let cache = Arc::new(RequestCache::new());
        let notifications: Arc<dyn NotificationSink> = Arc::new(TerminalNotificationSink);

        Self {
            goal_service: Arc::new(
                GoalService::new(api.clone(), cache.clone()).with_notifications(notifications),
            ),
            summary_service: Arc::new(SummaryService::new(api.clone(), cache.clone())),
            pending_goals_service: Arc::new(PendingGoalsService::new(api, cache)),
        }
    }
}
