use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Experience;

/// A registered user. Trainers see management endpoints; everyone else only
/// trains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub code: i64,
    pub level: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
    /// Minutes that must pass after a finished session before the next one.
    pub training_frequency: i64,
    pub is_trainer: bool,
    pub experience_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invites: Option<Vec<Invite>>,
}

/// A one-time code permitting self-registration as an instructor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invite {
    pub invite_id: Uuid,
    pub code: i64,
    pub created_at: DateTime<Utc>,
    pub expires_in: DateTime<Utc>,
    pub user_id: Uuid,
}
