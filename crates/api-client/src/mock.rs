//! Programmable in-memory implementation of [`GoalsApi`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{GoalsApi, GOALS_PATH, PENDING_GOALS_PATH, SUMMARY_PATH};
use crate::errors::ApiError;
use crate::models::{CreateGoalRequest, PendingGoal, Summary};

/// Mock API for testing. Records every `create_goal` payload and counts calls
/// per endpoint; responses are programmable per endpoint.
///
/// Defaults to an empty summary, no pending goals, and successful creation.
pub struct MockGoalsApi {
    summary: Mutex<Result<Summary, String>>,
    pending_goals: Mutex<Result<Vec<PendingGoal>, String>>,
    create_result: Mutex<Result<(), String>>,
    created: Mutex<Vec<CreateGoalRequest>>,
    summary_calls: AtomicUsize,
    pending_calls: AtomicUsize,
}

impl Default for MockGoalsApi {
    fn default() -> Self {
        Self {
            summary: Mutex::new(Ok(Summary::default())),
            pending_goals: Mutex::new(Ok(Vec::new())),
            create_result: Mutex::new(Ok(())),
            created: Mutex::new(Vec::new()),
            summary_calls: AtomicUsize::new(0),
            pending_calls: AtomicUsize::new(0),
        }
    }
}

impl MockGoalsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the summary returned by `get_summary`.
    pub fn set_summary(&self, summary: Summary) {
        *self.summary.lock().unwrap() = Ok(summary);
    }

    /// Makes `get_summary` fail with the given message.
    pub fn fail_summary(&self, message: impl Into<String>) {
        *self.summary.lock().unwrap() = Err(message.into());
    }

    /// Sets the list returned by `get_pending_goals`.
    pub fn set_pending_goals(&self, goals: Vec<PendingGoal>) {
        *self.pending_goals.lock().unwrap() = Ok(goals);
    }

    /// Makes `create_goal` fail with the given message.
    pub fn fail_create(&self, message: impl Into<String>) {
        *self.create_result.lock().unwrap() = Err(message.into());
    }

    /// Every payload submitted through `create_goal`, in order.
    pub fn created(&self) -> Vec<CreateGoalRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    pub fn pending_calls(&self) -> usize {
        self.pending_calls.load(Ordering::SeqCst)
    }

    fn network_error(path: &str, message: String) -> ApiError {
        ApiError::Network {
            path: path.to_string(),
            message,
        }
    }
}

#[async_trait]
impl GoalsApi for MockGoalsApi {
    async fn get_summary(&self) -> Result<Summary, ApiError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        self.summary
            .lock()
            .unwrap()
            .clone()
            .map_err(|message| Self::network_error(SUMMARY_PATH, message))
    }

    async fn get_pending_goals(&self) -> Result<Vec<PendingGoal>, ApiError> {
        self.pending_calls.fetch_add(1, Ordering::SeqCst);
        self.pending_goals
            .lock()
            .unwrap()
            .clone()
            .map_err(|message| Self::network_error(PENDING_GOALS_PATH, message))
    }

    async fn create_goal(&self, goal: &CreateGoalRequest) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(goal.clone());
        self.create_result
            .lock()
            .unwrap()
            .clone()
            .map_err(|message| Self::network_error(GOALS_PATH, message))
    }
}
