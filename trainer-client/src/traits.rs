//! TrainerService trait abstraction for client implementations

use crate::error::ClientResult;
use async_trait::async_trait;
use trainer_api::*;
use uuid::Uuid;

/// Core trainer service interface
/// Implemented by both real TrainerClient and MockTrainerService
#[async_trait]
pub trait TrainerService: Send + Sync {
    /// Install (or clear) the bearer credential attached to every request.
    /// Owned by the auth model; nothing else mutates credentials.
    fn set_token(&mut self, token: Option<String>);

    /// Exchange a digits-only phone number for a token and user profile
    async fn sign_in(&mut self, phone_number: &str) -> ClientResult<SignInResponse>;

    /// Register a new user
    async fn sign_up(&mut self, data: &SignUpRequest) -> ClientResult<User>;

    /// Get the authoritative session-availability snapshot
    async fn training_status(&mut self) -> ClientResult<SessionStatus>;

    /// Start a new training session
    async fn start_training(&mut self) -> ClientResult<SessionStatus>;

    /// End the active training session (irreversible)
    async fn stop_training(&mut self) -> ClientResult<SessionStatus>;

    /// Mark one session exercise as completed
    async fn finish_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus>;

    /// Mark one session exercise as skipped
    async fn skip_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus>;

    /// Put a completed/skipped session exercise back to pending
    async fn restore_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus>;

    async fn list_categories(&mut self) -> ClientResult<Vec<Category>>;
    async fn create_category(&mut self, data: &CategoryData) -> ClientResult<Category>;
    async fn update_category(&mut self, id: Uuid, data: &CategoryData) -> ClientResult<Category>;
    async fn delete_category(&mut self, id: Uuid) -> ClientResult<Category>;

    async fn list_exercises(&mut self) -> ClientResult<Vec<Exercise>>;
    async fn create_exercise(&mut self, data: &ExerciseData) -> ClientResult<Exercise>;
    async fn update_exercise(&mut self, id: Uuid, data: &ExerciseData) -> ClientResult<Exercise>;
    async fn delete_exercise(&mut self, id: Uuid) -> ClientResult<Exercise>;

    async fn list_experiences(&mut self) -> ClientResult<Vec<Experience>>;
    async fn create_experience(&mut self, data: &ExperienceData) -> ClientResult<Experience>;
    async fn update_experience(&mut self, id: Uuid, data: &ExperienceData)
        -> ClientResult<Experience>;
    async fn delete_experience(&mut self, id: Uuid) -> ClientResult<Experience>;

    async fn list_trainings(&mut self) -> ClientResult<Vec<Training>>;
    async fn create_training(&mut self, data: &TrainingData) -> ClientResult<Training>;
    async fn update_training(&mut self, id: Uuid, data: &TrainingData) -> ClientResult<Training>;
    async fn delete_training(&mut self, id: Uuid) -> ClientResult<Training>;

    /// List all users (trainer only)
    async fn list_users(&mut self) -> ClientResult<Vec<User>>;

    /// Generate a fresh instructor invite code (trainer only)
    async fn invite_code(&mut self) -> ClientResult<i64>;
}
