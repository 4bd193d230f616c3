use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::User;

/// Body for `POST /signin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub phone_number: String,
}

/// Successful `POST /signin` response: bearer token plus the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: User,
}

/// Body for `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub experience_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trainer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<i64>,
}
