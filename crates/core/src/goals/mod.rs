//! Goal creation - models, validation, form state, and service.

mod goal_form;
mod goals_errors;
mod goals_model;
mod goals_service;
mod goals_traits;


pub use goal_form::CreateGoalForm;
pub use goals_errors::{FieldError, GoalField, ValidationErrors};
pub use goals_model::{
    frequency_label, GoalDraft, DESCRIPTION_TOO_LONG, FREQUENCY_OUT_OF_RANGE, TITLE_TOO_SHORT,
    WEEKLY_FREQUENCY_OPTIONS,
};
pub use goals_service::{GoalService, GOAL_CREATED, GOAL_CREATE_FAILED};
pub use goals_traits::GoalServiceTrait;
