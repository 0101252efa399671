//! Weekgoals Core - domain models, services, and view state machines.
//!
//! This crate contains the client-side logic for the weekly goals app:
//! goal drafts and validation, the creation form, the summary and pending
//! goals views, the request cache, and user notifications. The only
//! client-side state is the in-memory request cache; all HTTP access goes
//! through the `weekgoals-api` trait.

pub mod cache;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod notifications;
pub mod summary;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
