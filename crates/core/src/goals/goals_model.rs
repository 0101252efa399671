//! Goal creation models and validation.

use serde::{Deserialize, Serialize};

use super::goals_errors::{FieldError, GoalField, ValidationErrors};
use crate::constants::{
    MAX_DESCRIPTION_LEN, MAX_WEEKLY_FREQUENCY, MIN_TITLE_LEN, MIN_WEEKLY_FREQUENCY,
};
use weekgoals_api::CreateGoalRequest;

/// Validation messages shown inline on the creation form.
pub const TITLE_TOO_SHORT: &str = "Informe a atividade que deseja realizar";
pub const DESCRIPTION_TOO_LONG: &str = "Limite de 300 caracteres";
pub const FREQUENCY_OUT_OF_RANGE: &str = "Escolha de 1 a 7 vezes na semana";

/// Display labels for the weekly frequency choices, in option order.
pub const WEEKLY_FREQUENCY_OPTIONS: [(i32, &str); 7] = [
    (1, "1x na semana 🥱"),
    (2, "2x na semana 🙂"),
    (3, "3x na semana 😎"),
    (4, "4x na semana 😜"),
    (5, "5x na semana 🤨"),
    (6, "6x na semana 🤯"),
    (7, "Todos os dias da semana 🔥"),
];

/// Label for a frequency value, if it is one of the seven options.
pub fn frequency_label(frequency: i32) -> Option<&'static str> {
    WEEKLY_FREQUENCY_OPTIONS
        .iter()
        .find(|(value, _)| *value == frequency)
        .map(|(_, label)| *label)
}

/// Unvalidated input for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub desired_weekly_frequency: i32,
}

impl GoalDraft {
    /// Validates the draft, collecting every failing field.
    ///
    /// The produced request is the only path to the creation endpoint, so an
    /// invalid draft can never reach the network. An absent description
    /// normalizes to an empty string.
    pub fn validate(&self) -> Result<CreateGoalRequest, ValidationErrors> {
        let mut errors = Vec::new();

        if self.title.chars().count() < MIN_TITLE_LEN {
            errors.push(FieldError {
                field: GoalField::Title,
                message: TITLE_TOO_SHORT,
            });
        }

        let description = self.description.clone().unwrap_or_default();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(FieldError {
                field: GoalField::Description,
                message: DESCRIPTION_TOO_LONG,
            });
        }

        if !(MIN_WEEKLY_FREQUENCY..=MAX_WEEKLY_FREQUENCY).contains(&self.desired_weekly_frequency)
        {
            errors.push(FieldError {
                field: GoalField::DesiredWeeklyFrequency,
                message: FREQUENCY_OUT_OF_RANGE,
            });
        }

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(CreateGoalRequest {
            title: self.title.clone(),
            description,
            desired_weekly_frequency: self.desired_weekly_frequency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: Option<&str>, frequency: i32) -> GoalDraft {
        GoalDraft {
            title: title.to_string(),
            description: description.map(str::to_string),
            desired_weekly_frequency: frequency,
        }
    }

    #[test]
    fn test_short_title_fails_on_title_field() {
        for title in ["", "A", "Ab"] {
            let errors = draft(title, None, 3).validate().unwrap_err();
            assert_eq!(errors.for_field(GoalField::Title), Some(TITLE_TOO_SHORT));
        }
    }

    #[test]
    fn test_three_char_title_passes() {
        let request = draft("Run", None, 3).validate().unwrap();
        assert_eq!(request.title, "Run");
    }

    #[test]
    fn test_absent_description_normalizes_to_empty() {
        let request = draft("Correr", None, 3).validate().unwrap();
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_description_at_limit_passes() {
        let description = "a".repeat(300);
        let request = draft("Correr", Some(&description), 3).validate().unwrap();
        assert_eq!(request.description.len(), 300);
    }

    #[test]
    fn test_description_over_limit_fails() {
        let description = "a".repeat(301);
        let errors = draft("Correr", Some(&description), 3).validate().unwrap_err();
        assert_eq!(
            errors.for_field(GoalField::Description),
            Some(DESCRIPTION_TOO_LONG)
        );
    }

    #[test]
    fn test_frequency_out_of_range_fails() {
        for frequency in [-1, 0, 8, 100] {
            let errors = draft("Correr", None, frequency).validate().unwrap_err();
            assert_eq!(
                errors.for_field(GoalField::DesiredWeeklyFrequency),
                Some(FREQUENCY_OUT_OF_RANGE)
            );
        }
    }

    #[test]
    fn test_frequencies_one_through_seven_round_trip() {
        for frequency in 1..=7 {
            let request = draft("Correr", None, frequency).validate().unwrap();
            assert_eq!(request.desired_weekly_frequency, frequency);
        }
    }

    #[test]
    fn test_all_failures_are_collected() {
        let description = "a".repeat(301);
        let errors = draft("Ab", Some(&description), 0).validate().unwrap_err();
        assert_eq!(errors.errors().len(), 3);
    }

    #[test]
    fn test_every_frequency_option_has_a_label() {
        for frequency in 1..=7 {
            assert!(frequency_label(frequency).is_some());
        }
        assert!(frequency_label(0).is_none());
        assert!(frequency_label(8).is_none());
    }
}
