//! Wire models for the goals API. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payload for `POST /goals`.
///
/// In practice only produced by successful validation of a draft in
/// `weekgoals-core`, which guarantees the title/description/frequency
/// constraints hold before anything reaches the network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub title: String,
    pub description: String,
    pub desired_weekly_frequency: i32,
}

/// Aggregate statistics over all goals for the current week.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: i64,
    pub goals_per_day: Option<HashMap<String, i64>>,
    pub completed: i64,
}

/// A goal with completions still left this week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingGoal {
    pub id: String,
    pub title: String,
    pub desired_weekly_frequency: i32,
    pub completion_count: i32,
}

/// Envelope returned by `GET /summary`. The server wraps the summary in a
/// single-element array; element 0 is the payload.
#[derive(Debug, Deserialize)]
pub struct SummaryEnvelope {
    pub summary: Vec<Summary>,
}

impl SummaryEnvelope {
    /// Unwraps the single-element envelope. `None` means the array was empty,
    /// which callers treat as a shape error.
    pub fn into_summary(self) -> Option<Summary> {
        self.summary.into_iter().next()
    }
}

/// Envelope returned by `GET /pending-goals`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingGoalsEnvelope {
    pub pending_goals: Vec<PendingGoal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_goal_request_serializes_camel_case() {
        let request = CreateGoalRequest {
            title: "Run".to_string(),
            description: String::new(),
            desired_weekly_frequency: 3,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Run",
                "description": "",
                "desiredWeeklyFrequency": 3
            })
        );
    }

    #[test]
    fn test_summary_envelope_unwraps_first_element() {
        let body = json!({
            "summary": [
                { "total": 5, "goalsPerDay": { "2026-08-24": 2 }, "completed": 3 }
            ]
        });

        let envelope: SummaryEnvelope = serde_json::from_value(body).unwrap();
        let summary = envelope.into_summary().unwrap();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed, 3);
        assert_eq!(
            summary.goals_per_day.unwrap().get("2026-08-24"),
            Some(&2i64)
        );
    }

    #[test]
    fn test_summary_accepts_null_goals_per_day() {
        let body = json!({ "summary": [{ "total": 0, "goalsPerDay": null, "completed": 0 }] });

        let envelope: SummaryEnvelope = serde_json::from_value(body).unwrap();
        let summary = envelope.into_summary().unwrap();
        assert_eq!(summary.goals_per_day, None);
    }

    #[test]
    fn test_empty_summary_envelope_yields_none() {
        let envelope: SummaryEnvelope = serde_json::from_value(json!({ "summary": [] })).unwrap();
        assert!(envelope.into_summary().is_none());
    }

    #[test]
    fn test_pending_goals_envelope_deserializes() {
        let body = json!({
            "pendingGoals": [
                {
                    "id": "abc123",
                    "title": "Meditar",
                    "desiredWeeklyFrequency": 5,
                    "completionCount": 2
                }
            ]
        });

        let envelope: PendingGoalsEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.pending_goals.len(), 1);
        assert_eq!(envelope.pending_goals[0].title, "Meditar");
        assert_eq!(envelope.pending_goals[0].completion_count, 2);
    }
}
