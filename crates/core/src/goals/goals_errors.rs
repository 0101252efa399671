//! Field-scoped validation errors for goal creation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field of the creation form a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalField {
    Title,
    Description,
    DesiredWeeklyFrequency,
}

impl GoalField {
    /// Wire name of the field, matching the creation payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalField::Title => "title",
            GoalField::Description => "description",
            GoalField::DesiredWeeklyFrequency => "desiredWeeklyFrequency",
        }
    }
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-scoped validation failure. Messages are fixed display
/// strings rendered inline next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: GoalField,
    pub message: &'static str,
}

/// All validation failures for one draft, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    /// Message attached to the given field, if it failed.
    pub fn for_field(&self, field: GoalField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
