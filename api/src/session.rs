use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Exercise, Training};

/// One in-progress (or finished) run through a training template.
///
/// Server-owned; the client only ever holds the snapshot it was last given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub training_id: Uuid,
    pub user_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training: Option<Training>,
    #[serde(
        rename = "currentExercises",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exercises: Option<Vec<SessionExercise>>,
}

/// One exercise occurrence within a [`Session`].
///
/// Pending while both timestamps are null; the server sets at most one of
/// them, and "restore" clears it again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionExercise {
    pub id: Uuid,
    pub concluded_at: Option<DateTime<Utc>>,
    pub exited_at: Option<DateTime<Utc>>,
    pub times: u32,
    pub series: u32,
    pub current_id: Uuid,
    pub exercise_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

/// The authoritative availability snapshot returned by every session
/// endpoint. Replaces all prior client state wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionStatus {
    #[serde(rename = "activeCurrent")]
    pub active: Option<Session>,
    #[serde(rename = "hasAvailableCurrent")]
    pub has_available: bool,
    #[serde(rename = "lastFinishedCurrentDate")]
    pub last_finished: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_field_names_match_the_wire() {
        let json = r#"{
            "activeCurrent": null,
            "hasAvailableCurrent": true,
            "lastFinishedCurrentDate": "2024-03-01T10:00:00Z"
        }"#;
        let status: SessionStatus = serde_json::from_str(json).unwrap();
        assert!(status.active.is_none());
        assert!(status.has_available);
        assert!(status.last_finished.is_some());
    }

    #[test]
    fn session_embeds_exercises_under_current_exercises() {
        let json = r#"{
            "id": "7b6b0a52-9b7e-4a84-8e2f-0c8f6f1f3b31",
            "started_at": "2024-03-01T10:00:00Z",
            "ended_at": null,
            "training_id": "3a4f3c1e-90ab-4bfa-9d47-59f51a4bb2a9",
            "user_id": "a7cf3c5e-27d8-4e96-9a7f-1f54f1f9f001",
            "currentExercises": []
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.exercises.map(|e| e.len()), Some(0));
        assert!(session.training.is_none());
    }
}
