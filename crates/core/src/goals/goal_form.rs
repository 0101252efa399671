//! Goal-creation form state.
//!
//! Holds the raw field values between renders, the per-field validation
//! errors from the last submit attempt, and the in-flight flag. Field values
//! survive a failed submission so the user can retry; a successful submission
//! resets the form to its defaults.

use super::goals_errors::{FieldError, GoalField, ValidationErrors};
use super::goals_model::{GoalDraft, FREQUENCY_OUT_OF_RANGE};
use super::goals_traits::GoalServiceTrait;
use crate::constants::DEFAULT_WEEKLY_FREQUENCY;
use crate::errors::Error;

#[derive(Debug, Clone)]
pub struct CreateGoalForm {
    title: String,
    description: String,
    /// Raw value of the selected frequency option. Kept as entered; coercion
    /// to an integer happens on submit, so non-numeric input fails validation
    /// on the frequency field instead of panicking.
    frequency: String,
    errors: Vec<FieldError>,
    submitting: bool,
}

impl Default for CreateGoalForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateGoalForm {
    /// An empty form with the default frequency (3) selected.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            frequency: DEFAULT_WEEKLY_FREQUENCY.to_string(),
            errors: Vec::new(),
            submitting: false,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_frequency(&mut self, raw: impl Into<String>) {
        self.frequency = raw.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message attached to the given field by the last submit attempt.
    pub fn error_for(&self, field: GoalField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Coerces the raw fields into a draft. A non-numeric frequency fails on
    /// the frequency field with the range message.
    fn draft(&self) -> Result<GoalDraft, ValidationErrors> {
        let frequency: i32 = self.frequency.trim().parse().map_err(|_| {
            ValidationErrors::new(vec![FieldError {
                field: GoalField::DesiredWeeklyFrequency,
                message: FREQUENCY_OUT_OF_RANGE,
            }])
        })?;

        Ok(GoalDraft {
            title: self.title.clone(),
            description: if self.description.is_empty() {
                None
            } else {
                Some(self.description.clone())
            },
            desired_weekly_frequency: frequency,
        })
    }

    /// Runs the submit flow against the service.
    ///
    /// Returns `true` when the goal was created. A validation failure stores
    /// the field errors and blocks the network call entirely; a submission
    /// failure keeps the entered values for a manual retry (the service emits
    /// the failure notification).
    pub async fn submit(&mut self, service: &dyn GoalServiceTrait) -> bool {
        self.errors.clear();

        let draft = match self.draft() {
            Ok(draft) => draft,
            Err(errors) => {
                self.errors = errors.into_errors();
                return false;
            }
        };

        self.submitting = true;
        let result = service.create_goal(draft).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                *self = Self::new();
                true
            }
            Err(Error::Validation(errors)) => {
                self.errors = errors.into_errors();
                false
            }
            Err(_) => false,
        }
    }
}
