//! reqwest-backed implementation of the goals API.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::errors::ApiError;
use crate::models::{
    CreateGoalRequest, PendingGoal, PendingGoalsEnvelope, Summary, SummaryEnvelope,
};

/// Base origin of the hosted goals backend.
pub const DEFAULT_BASE_URL: &str = "https://goals-back.vercel.app";

/// Endpoint paths, also used as cache keys by `weekgoals-core`.
pub const SUMMARY_PATH: &str = "/summary";
pub const PENDING_GOALS_PATH: &str = "/pending-goals";
pub const GOALS_PATH: &str = "/goals";

/// Default HTTP request timeout. Bounds a hung connection; there is still no
/// retry on top of it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-facing API surface.
///
/// Implemented by [`GoalsApiClient`] for real traffic and by
/// [`crate::mock::MockGoalsApi`] for tests.
#[async_trait]
pub trait GoalsApi: Send + Sync {
    /// Fetches the weekly summary from `GET /summary`.
    async fn get_summary(&self) -> Result<Summary, ApiError>;

    /// Fetches the goals still pending this week from `GET /pending-goals`.
    async fn get_pending_goals(&self) -> Result<Vec<PendingGoal>, ApiError>;

    /// Submits a new goal to `POST /goals`. No response body is required,
    /// only a success status.
    async fn create_goal(&self, goal: &CreateGoalRequest) -> Result<(), ApiError>;
}

/// HTTP client for the goals backend.
pub struct GoalsApiClient {
    client: Client,
    base_url: String,
}

impl GoalsApiClient {
    /// Creates a client against the given base origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for GoalsApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl GoalsApi for GoalsApiClient {
    async fn get_summary(&self) -> Result<Summary, ApiError> {
        log::debug!("GET {}", SUMMARY_PATH);

        let response = self
            .client
            .get(self.url(SUMMARY_PATH))
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(SUMMARY_PATH, e))?
            .error_for_status()
            .map_err(|e| ApiError::from_reqwest(SUMMARY_PATH, e))?;

        let envelope: SummaryEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::from_reqwest(SUMMARY_PATH, e))?;

        envelope.into_summary().ok_or_else(|| ApiError::MissingData {
            path: SUMMARY_PATH.to_string(),
            message: "summary array is empty".to_string(),
        })
    }

    async fn get_pending_goals(&self) -> Result<Vec<PendingGoal>, ApiError> {
        log::debug!("GET {}", PENDING_GOALS_PATH);

        let response = self
            .client
            .get(self.url(PENDING_GOALS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(PENDING_GOALS_PATH, e))?
            .error_for_status()
            .map_err(|e| ApiError::from_reqwest(PENDING_GOALS_PATH, e))?;

        let envelope: PendingGoalsEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::from_reqwest(PENDING_GOALS_PATH, e))?;

        Ok(envelope.pending_goals)
    }

    async fn create_goal(&self, goal: &CreateGoalRequest) -> Result<(), ApiError> {
        log::debug!("POST {}", GOALS_PATH);

        self.client
            .post(self.url(GOALS_PATH))
            .json(goal)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(GOALS_PATH, e))?
            .error_for_status()
            .map_err(|e| ApiError::from_reqwest(GOALS_PATH, e))?;

        Ok(())
    }
}
