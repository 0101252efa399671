//! Weekly summary and pending goals - services and view state.

mod summary_service;
mod summary_traits;
mod summary_view;

#[cfg(test)]
mod summary_service_tests;

// The wire models double as the domain models; they are replaced wholesale on
// every successful fetch and never mutated in place.
pub use weekgoals_api::models::{PendingGoal, Summary};

pub use summary_service::{PendingGoalsService, SummaryService};
pub use summary_traits::{PendingGoalsServiceTrait, SummaryServiceTrait};
pub use summary_view::{SummaryView, SummaryViewState};
