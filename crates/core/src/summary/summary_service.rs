use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use super::summary_traits::{PendingGoalsServiceTrait, SummaryServiceTrait};
use crate::cache::{Fetcher, RequestCache};
use crate::constants::{PENDING_GOALS_KEY, SUMMARY_KEY};
use crate::errors::Result;
use weekgoals_api::{GoalsApi, PendingGoal, Summary};

/// Reads the weekly summary through the request cache.
#[derive(Clone)]
pub struct SummaryService {
    api: Arc<dyn GoalsApi>,
    cache: Arc<RequestCache>,
}

impl SummaryService {
    pub fn new(api: Arc<dyn GoalsApi>, cache: Arc<RequestCache>) -> Self {
        Self { api, cache }
    }

    fn fetcher(&self) -> Fetcher {
        let api = self.api.clone();
        Arc::new(move || {
            let api = api.clone();
            async move {
                let summary = api.get_summary().await.map_err(|e| e.to_string())?;
                serde_json::to_value(summary).map_err(|e| e.to_string())
            }
            .boxed()
        })
    }
}

#[async_trait]
impl SummaryServiceTrait for SummaryService {
    async fn get_summary(&self) -> Result<Summary> {
        let value = self.cache.get_or_fetch(SUMMARY_KEY, self.fetcher()).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Reads the pending goals list through the request cache.
#[derive(Clone)]
pub struct PendingGoalsService {
    api: Arc<dyn GoalsApi>,
    cache: Arc<RequestCache>,
}

impl PendingGoalsService {
    pub fn new(api: Arc<dyn GoalsApi>, cache: Arc<RequestCache>) -> Self {
        Self { api, cache }
    }

    fn fetcher(&self) -> Fetcher {
        let api = self.api.clone();
        Arc::new(move || {
            let api = api.clone();
            async move {
                let goals = api.get_pending_goals().await.map_err(|e| e.to_string())?;
                serde_json::to_value(goals).map_err(|e| e.to_string())
            }
            .boxed()
        })
    }
}

#[async_trait]
impl PendingGoalsServiceTrait for PendingGoalsService {
    async fn get_pending_goals(&self) -> Result<Vec<PendingGoal>> {
        let value = self
            .cache
            .get_or_fetch(PENDING_GOALS_KEY, self.fetcher())
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
