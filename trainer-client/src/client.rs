//! Trainer REST client implementation

use crate::error::{ClientError, ClientResult};
use crate::traits::TrainerService;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use trainer_api::*;
use uuid::Uuid;

/// Network client for communicating with the trainer server
pub struct TrainerClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl TrainerClient {
    /// Create a client against the given base URL, not yet signed in
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Build a request for `path`, attaching the bearer credential when one
    /// is installed.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map the response to the error taxonomy, or deserialize the body.
    async fn take_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::InvalidData(e.to_string()));
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            StatusCode::CONFLICT => Err(ClientError::Conflict),
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::take_json(response).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::POST, path).send().await?;
        Self::take_json(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + Sync,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::take_json(response).await
    }

    async fn put<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::PUT, path).send().await?;
        Self::take_json(response).await
    }

    async fn put_json<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize + Sync,
    {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::take_json(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::take_json(response).await
    }
}

#[async_trait]
impl TrainerService for TrainerClient {
    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn sign_in(&mut self, phone_number: &str) -> ClientResult<SignInResponse> {
        let body = SignInRequest {
            phone_number: phone_number.to_string(),
        };
        self.post_json("/signin", &body).await
    }

    async fn sign_up(&mut self, data: &SignUpRequest) -> ClientResult<User> {
        self.post_json("/signup", data).await
    }

    async fn training_status(&mut self) -> ClientResult<SessionStatus> {
        self.get("/current/active").await
    }

    async fn start_training(&mut self) -> ClientResult<SessionStatus> {
        self.post("/current/start").await
    }

    async fn stop_training(&mut self) -> ClientResult<SessionStatus> {
        self.put("/current/active/stop").await
    }

    async fn finish_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus> {
        self.put(&format!("/current/active/exercise/{exercise_id}/finish"))
            .await
    }

    async fn skip_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus> {
        self.put(&format!("/current/active/exercise/{exercise_id}/skip"))
            .await
    }

    async fn restore_exercise(&mut self, exercise_id: Uuid) -> ClientResult<SessionStatus> {
        self.put(&format!("/current/active/exercise/{exercise_id}/restore"))
            .await
    }

    async fn list_categories(&mut self) -> ClientResult<Vec<Category>> {
        self.get("/category").await
    }

    async fn create_category(&mut self, data: &CategoryData) -> ClientResult<Category> {
        self.post_json("/category", data).await
    }

    async fn update_category(&mut self, id: Uuid, data: &CategoryData) -> ClientResult<Category> {
        self.put_json(&format!("/category/{id}"), data).await
    }

    async fn delete_category(&mut self, id: Uuid) -> ClientResult<Category> {
        self.delete(&format!("/category/{id}")).await
    }

    async fn list_exercises(&mut self) -> ClientResult<Vec<Exercise>> {
        self.get("/exercise").await
    }

    async fn create_exercise(&mut self, data: &ExerciseData) -> ClientResult<Exercise> {
        self.post_json("/exercise", data).await
    }

    async fn update_exercise(&mut self, id: Uuid, data: &ExerciseData) -> ClientResult<Exercise> {
        self.put_json(&format!("/exercise/{id}"), data).await
    }

    async fn delete_exercise(&mut self, id: Uuid) -> ClientResult<Exercise> {
        self.delete(&format!("/exercise/{id}")).await
    }

    async fn list_experiences(&mut self) -> ClientResult<Vec<Experience>> {
        self.get("/experience").await
    }

    async fn create_experience(&mut self, data: &ExperienceData) -> ClientResult<Experience> {
        self.post_json("/experience", data).await
    }

    async fn update_experience(
        &mut self,
        id: Uuid,
        data: &ExperienceData,
    ) -> ClientResult<Experience> {
        self.put_json(&format!("/experience/{id}"), data).await
    }

    async fn delete_experience(&mut self, id: Uuid) -> ClientResult<Experience> {
        self.delete(&format!("/experience/{id}")).await
    }

    async fn list_trainings(&mut self) -> ClientResult<Vec<Training>> {
        self.get("/training").await
    }

    async fn create_training(&mut self, data: &TrainingData) -> ClientResult<Training> {
        self.post_json("/training", data).await
    }

    async fn update_training(&mut self, id: Uuid, data: &TrainingData) -> ClientResult<Training> {
        self.put_json(&format!("/training/{id}"), data).await
    }

    async fn delete_training(&mut self, id: Uuid) -> ClientResult<Training> {
        self.delete(&format!("/training/{id}")).await
    }

    async fn list_users(&mut self) -> ClientResult<Vec<User>> {
        self.get("/user").await
    }

    async fn invite_code(&mut self) -> ClientResult<i64> {
        self.get("/user/invite_code").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = TrainerClient::new("http://localhost:3333/");
        assert_eq!(client.base_url, "http://localhost:3333");
    }
}
