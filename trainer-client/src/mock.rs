//! Mock TrainerService implementation for testing

use crate::error::{ClientError, ClientResult};
use crate::traits::TrainerService;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use trainer_api::*;
use uuid::Uuid;

/// Mock service for testing - only compiled in test mode or with mock feature
#[cfg(any(test, feature = "mock"))]
pub struct MockTrainerService {
    responses: Arc<Mutex<MockResponses>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[cfg(any(test, feature = "mock"))]
#[derive(Default)]
struct MockResponses {
    sign_in: Option<Box<dyn Fn() -> ClientResult<SignInResponse> + Send>>,
    sign_up: Option<Box<dyn Fn() -> ClientResult<User> + Send>>,
    training_status: Option<Box<dyn Fn() -> ClientResult<SessionStatus> + Send>>,
    start_training: Option<Box<dyn Fn() -> ClientResult<SessionStatus> + Send>>,
    stop_training: Option<Box<dyn Fn() -> ClientResult<SessionStatus> + Send>>,
    finish_exercise: Option<Box<dyn Fn() -> ClientResult<SessionStatus> + Send>>,
    skip_exercise: Option<Box<dyn Fn() -> ClientResult<SessionStatus> + Send>>,
    restore_exercise: Option<Box<dyn Fn() -> ClientResult<SessionStatus> + Send>>,
    invite_code: Option<Box<dyn Fn() -> ClientResult<i64> + Send>>,
}

#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    SetToken { present: bool },
    SignIn { phone_number: String },
    SignUp { phone_number: String },
    TrainingStatus,
    StartTraining,
    StopTraining,
    FinishExercise { exercise_id: Uuid },
    SkipExercise { exercise_id: Uuid },
    RestoreExercise { exercise_id: Uuid },
    InviteCode,
    Catalog { op: &'static str },
}

#[cfg(any(test, feature = "mock"))]
impl Default for MockTrainerService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockTrainerService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(MockResponses::default())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure sign_in response
    pub fn with_sign_in_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SignInResponse> + Send + 'static,
    {
        self.responses.lock().unwrap().sign_in = Some(Box::new(f));
        self
    }

    /// Configure sign_up response
    pub fn with_sign_up_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<User> + Send + 'static,
    {
        self.responses.lock().unwrap().sign_up = Some(Box::new(f));
        self
    }

    /// Configure training_status response
    pub fn with_status_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SessionStatus> + Send + 'static,
    {
        self.responses.lock().unwrap().training_status = Some(Box::new(f));
        self
    }

    /// Configure start_training response
    pub fn with_start_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SessionStatus> + Send + 'static,
    {
        self.responses.lock().unwrap().start_training = Some(Box::new(f));
        self
    }

    /// Configure stop_training response
    pub fn with_stop_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SessionStatus> + Send + 'static,
    {
        self.responses.lock().unwrap().stop_training = Some(Box::new(f));
        self
    }

    /// Configure finish_exercise response
    pub fn with_finish_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SessionStatus> + Send + 'static,
    {
        self.responses.lock().unwrap().finish_exercise = Some(Box::new(f));
        self
    }

    /// Configure skip_exercise response
    pub fn with_skip_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SessionStatus> + Send + 'static,
    {
        self.responses.lock().unwrap().skip_exercise = Some(Box::new(f));
        self
    }

    /// Configure restore_exercise response
    pub fn with_restore_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<SessionStatus> + Send + 'static,
    {
        self.responses.lock().unwrap().restore_exercise = Some(Box::new(f));
        self
    }

    /// Configure invite_code response
    pub fn with_invite_code_response<F>(self, f: F) -> Self
    where
        F: Fn() -> ClientResult<i64> + Send + 'static,
    {
        self.responses.lock().unwrap().invite_code = Some(Box::new(f));
        self
    }

    /// Pre-configure a signed-in user with a training ready to start
    pub fn with_available_training(self) -> Self {
        let status = SessionStatus {
            active: None,
            has_available: true,
            last_finished: None,
        };
        let status2 = status.clone();
        self.with_status_response(move || Ok(status.clone()))
            .with_sign_in_response(move || {
                Ok(SignInResponse {
                    token: "test-token-001".to_string(),
                    user: sample_user(),
                })
            })
            .with_start_response(move || Ok(status2.clone()))
    }

    /// Get recorded calls for verification
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Clear call history
    pub fn clear_calls(&self) {
        self.call_log.lock().unwrap().clear()
    }

    fn log(&self, call: MockCall) {
        self.call_log.lock().unwrap().push(call);
    }

    fn respond<T>(
        &self,
        slot: &Option<Box<dyn Fn() -> ClientResult<T> + Send>>,
        name: &str,
    ) -> ClientResult<T> {
        match slot {
            Some(f) => f(),
            None => Err(ClientError::NotConfigured(name.to_string())),
        }
    }
}

/// A plain non-trainer user for presets and tests.
#[cfg(any(test, feature = "mock"))]
pub fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        phone_number: "11988887777".to_string(),
        code: 1234,
        level: 3,
        current_xp: 120,
        xp_to_next_level: 200,
        training_frequency: 90,
        is_trainer: false,
        experience_id: Uuid::new_v4(),
        experience: None,
        invites: None,
    }
}

#[cfg(any(test, feature = "mock"))]
#[async_trait]
impl TrainerService for MockTrainerService {
    fn set_token(&mut self, token: Option<String>) {
        self.log(MockCall::SetToken {
            present: token.is_some(),
        });
    }

    async fn sign_in(&mut self, phone_number: &str) -> ClientResult<SignInResponse> {
        self.log(MockCall::SignIn {
            phone_number: phone_number.to_string(),
        });
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.sign_in, "sign_in")
    }

    async fn sign_up(&mut self, data: &SignUpRequest) -> ClientResult<User> {
        self.log(MockCall::SignUp {
            phone_number: data.phone_number.clone(),
        });
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.sign_up, "sign_up")
    }

    async fn training_status(&mut self) -> ClientResult<SessionStatus> {
        self.log(MockCall::TrainingStatus);
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.training_status, "training_status")
    }

    async fn start_training(&mut self) -> ClientResult<SessionStatus> {
        self.log(MockCall::StartTraining);
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.start_training, "start_training")
    }

    async fn stop_training(&mut self) -> ClientResult<SessionStatus> {
        self.log(MockCall::StopTraining);
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.stop_training, "stop_training")
    }

    async fn finish_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus> {
        self.log(MockCall::FinishExercise { exercise_id });
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.finish_exercise, "finish_exercise")
    }

    async fn skip_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus> {
        self.log(MockCall::SkipExercise { exercise_id });
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.skip_exercise, "skip_exercise")
    }

    async fn restore_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus> {
        self.log(MockCall::RestoreExercise { exercise_id });
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.restore_exercise, "restore_exercise")
    }

    async fn list_categories(&mut self) -> ClientResult<Vec<Category>> {
        self.log(MockCall::Catalog {
            op: "list_categories",
        });
        Err(ClientError::NotConfigured("list_categories".to_string()))
    }

    async fn create_category(&mut self, _data: &CategoryData) -> ClientResult<Category> {
        self.log(MockCall::Catalog {
            op: "create_category",
        });
        Err(ClientError::NotConfigured("create_category".to_string()))
    }

    async fn update_category(&mut self, _id: Uuid, _data: &CategoryData) -> ClientResult<Category> {
        self.log(MockCall::Catalog {
            op: "update_category",
        });
        Err(ClientError::NotConfigured("update_category".to_string()))
    }

    async fn delete_category(&mut self, _id: Uuid) -> ClientResult<Category> {
        self.log(MockCall::Catalog {
            op: "delete_category",
        });
        Err(ClientError::NotConfigured("delete_category".to_string()))
    }

    async fn list_exercises(&mut self) -> ClientResult<Vec<Exercise>> {
        self.log(MockCall::Catalog {
            op: "list_exercises",
        });
        Err(ClientError::NotConfigured("list_exercises".to_string()))
    }

    async fn create_exercise(&mut self, _data: &ExerciseData) -> ClientResult<Exercise> {
        self.log(MockCall::Catalog {
            op: "create_exercise",
        });
        Err(ClientError::NotConfigured("create_exercise".to_string()))
    }

    async fn update_exercise(&mut self, _id: Uuid, _data: &ExerciseData) -> ClientResult<Exercise> {
        self.log(MockCall::Catalog {
            op: "update_exercise",
        });
        Err(ClientError::NotConfigured("update_exercise".to_string()))
    }

    async fn delete_exercise(&mut self, _id: Uuid) -> ClientResult<Exercise> {
        self.log(MockCall::Catalog {
            op: "delete_exercise",
        });
        Err(ClientError::NotConfigured("delete_exercise".to_string()))
    }

    async fn list_experiences(&mut self) -> ClientResult<Vec<Experience>> {
        self.log(MockCall::Catalog {
            op: "list_experiences",
        });
        Err(ClientError::NotConfigured("list_experiences".to_string()))
    }

    async fn create_experience(&mut self, _data: &ExperienceData) -> ClientResult<Experience> {
        self.log(MockCall::Catalog {
            op: "create_experience",
        });
        Err(ClientError::NotConfigured("create_experience".to_string()))
    }

    async fn update_experience(
        &mut self,
        _id: Uuid,
        _data: &ExperienceData,
    ) -> ClientResult<Experience> {
        self.log(MockCall::Catalog {
            op: "update_experience",
        });
        Err(ClientError::NotConfigured("update_experience".to_string()))
    }

    async fn delete_experience(&mut self, _id: Uuid) -> ClientResult<Experience> {
        self.log(MockCall::Catalog {
            op: "delete_experience",
        });
        Err(ClientError::NotConfigured("delete_experience".to_string()))
    }

    async fn list_trainings(&mut self) -> ClientResult<Vec<Training>> {
        self.log(MockCall::Catalog {
            op: "list_trainings",
        });
        Err(ClientError::NotConfigured("list_trainings".to_string()))
    }

    async fn create_training(&mut self, _data: &TrainingData) -> ClientResult<Training> {
        self.log(MockCall::Catalog {
            op: "create_training",
        });
        Err(ClientError::NotConfigured("create_training".to_string()))
    }

    async fn update_training(&mut self, _id: Uuid, _data: &TrainingData) -> ClientResult<Training> {
        self.log(MockCall::Catalog {
            op: "update_training",
        });
        Err(ClientError::NotConfigured("update_training".to_string()))
    }

    async fn delete_training(&mut self, _id: Uuid) -> ClientResult<Training> {
        self.log(MockCall::Catalog {
            op: "delete_training",
        });
        Err(ClientError::NotConfigured("delete_training".to_string()))
    }

    async fn list_users(&mut self) -> ClientResult<Vec<User>> {
        self.log(MockCall::Catalog { op: "list_users" });
        Err(ClientError::NotConfigured("list_users".to_string()))
    }

    async fn invite_code(&mut self) -> ClientResult<i64> {
        self.log(MockCall::InviteCode);
        let responses = self.responses.lock().unwrap();
        self.respond(&responses.invite_code, "invite_code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_operation_errors() {
        let mut mock = MockTrainerService::new();
        let err = mock.training_status().await.unwrap_err();
        assert!(matches!(err, ClientError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn test_calls_are_recorded() {
        let mut mock = MockTrainerService::new().with_available_training();
        mock.sign_in("11988887777").await.unwrap();
        mock.training_status().await.unwrap();

        let calls = mock.get_calls();
        assert_eq!(
            calls,
            vec![
                MockCall::SignIn {
                    phone_number: "11988887777".to_string()
                },
                MockCall::TrainingStatus,
            ]
        );

        mock.clear_calls();
        assert!(mock.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_operations_are_logged() {
        let mut mock = MockTrainerService::new();
        let _ = mock.list_categories().await;
        assert_eq!(
            mock.get_calls(),
            vec![MockCall::Catalog {
                op: "list_categories"
            }]
        );
    }

    #[tokio::test]
    async fn test_configured_conflict_passes_through() {
        let mut mock = MockTrainerService::new().with_start_response(|| Err(ClientError::Conflict));
        let err = mock.start_training().await.unwrap_err();
        assert!(matches!(err, ClientError::Conflict));
    }
}
