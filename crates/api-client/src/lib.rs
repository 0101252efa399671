//! HTTP client for the weekgoals backend API.
//!
//! This crate owns the wire models, the [`GoalsApi`] trait, the reqwest-backed
//! [`GoalsApiClient`], and a programmable [`MockGoalsApi`] for downstream
//! tests. Every call is a single best-effort attempt: no retry, no backoff.

pub mod client;
pub mod errors;
pub mod mock;
pub mod models;

pub use client::{
    GoalsApi, GoalsApiClient, DEFAULT_BASE_URL, GOALS_PATH, PENDING_GOALS_PATH, SUMMARY_PATH,
};
pub use errors::ApiError;
pub use mock::MockGoalsApi;
pub use models::{CreateGoalRequest, PendingGoal, Summary};
