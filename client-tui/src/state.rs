use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, warn};
use trainer_api::{Experience, SignUpRequest, User};
use trainer_client::{ClientError, TrainerService};
use training::{phone, Phase, TrainingStatus};
use uuid::Uuid;

use crate::phone_file;

/// Who is signed in, and whether the server asked for a registration.
#[derive(Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub authenticated: bool,
    pub needs_sign_up: bool,
    /// Digits of the last phone number submitted to the server. The sign-up
    /// form pre-fills from this.
    pub phone_number: String,
}

impl AuthState {
    pub fn is_trainer(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_trainer)
    }

    /// Minutes between sessions for the signed-in user.
    pub fn training_frequency(&self) -> i64 {
        self.user.as_ref().map(|u| u.training_frequency).unwrap_or(0)
    }
}

/// The whole client-side session: one service connection, the auth state,
/// and the latest training-availability snapshot.
///
/// The server is the source of truth. Every mutating call here sends one
/// request and replaces the snapshot with whatever comes back; nothing is
/// validated or transitioned locally. Failures surface as a single notice
/// in `status_message` and leave prior state intact.
pub struct AppSession<S: TrainerService> {
    client: S,
    data_dir: PathBuf,
    pub auth: AuthState,
    pub status: TrainingStatus,
    /// Rendered countdown while cooling down, refreshed by [`tick`].
    ///
    /// [`tick`]: AppSession::tick
    pub countdown: Option<String>,
    /// One user-facing notice at a time.
    pub status_message: Option<String>,
}

impl<S: TrainerService> AppSession<S> {
    pub fn new(client: S, data_dir: PathBuf) -> Self {
        Self {
            client,
            data_dir,
            auth: AuthState::default(),
            status: TrainingStatus::default(),
            countdown: None,
            status_message: None,
        }
    }

    pub fn client(&self) -> &S {
        &self.client
    }

    /// Try to resume the previous session from the persisted phone number.
    /// Any failure besides "needs sign-up" forces a sign-out.
    pub async fn resume(&mut self) {
        let stored = match phone_file::load_phone_number(&self.data_dir) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read persisted phone number: {}", e);
                None
            }
        };

        match stored {
            Some(number) => {
                let signed_in = self.sign_in(&number).await;
                if !signed_in && !self.auth.needs_sign_up {
                    self.sign_out();
                }
            }
            None => self.sign_out(),
        }
    }

    /// Sign in with a raw phone number. Fewer than ten digits is rejected
    /// before any request goes out. A 401 means the number is unknown and
    /// flips `needs_sign_up` instead of erroring.
    ///
    /// Returns whether the session is authenticated afterwards.
    pub async fn sign_in(&mut self, raw_phone: &str) -> bool {
        let digits = phone::normalize(raw_phone);
        if !phone::is_valid(&digits) {
            self.status_message = Some("Invalid phone number!".to_string());
            return false;
        }

        self.auth.phone_number = digits.clone();

        match self.client.sign_in(&digits).await {
            Ok(auth) => {
                self.client.set_token(Some(auth.token));

                if let Err(e) = phone_file::save_phone_number(&self.data_dir, &auth.user.phone_number)
                {
                    warn!("Failed to persist phone number: {}", e);
                }

                info!(user = %auth.user.id, "Signed in");
                self.auth.user = Some(auth.user);
                self.auth.authenticated = true;
                self.auth.needs_sign_up = false;

                self.refresh_status().await;
                true
            }
            Err(ClientError::Unauthorized) => {
                self.auth.needs_sign_up = true;
                false
            }
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                self.status_message = Some("Could not sign in".to_string());
                false
            }
        }
    }

    /// Register a new user. Returns whether the registration succeeded.
    pub async fn sign_up(&mut self, mut data: SignUpRequest) -> bool {
        data.phone_number = phone::normalize(&data.phone_number);
        if !phone::is_valid(&data.phone_number) {
            self.status_message = Some("Invalid phone number!".to_string());
            return false;
        }

        match self.client.sign_up(&data).await {
            Ok(user) => {
                info!(user = %user.id, "Registered");
                self.auth.needs_sign_up = false;
                self.status_message = Some("Registration successful!".to_string());
                true
            }
            Err(ClientError::Unauthorized) => {
                self.status_message = Some("This invite code is not valid!".to_string());
                false
            }
            Err(ClientError::Conflict) => {
                self.status_message =
                    Some("This phone number is already registered!".to_string());
                false
            }
            Err(e) => {
                warn!("Sign-up failed: {}", e);
                self.status_message = Some("Could not sign up".to_string());
                false
            }
        }
    }

    /// Drop the credential, the persisted phone number, and all session
    /// state. A later resume attempt will find no identity.
    pub fn sign_out(&mut self) {
        self.client.set_token(None);

        if let Err(e) = phone_file::clear_phone_number(&self.data_dir) {
            warn!("Failed to clear persisted phone number: {}", e);
        }

        self.auth = AuthState::default();
        self.status.clear();
        self.countdown = None;
    }

    /// Fetch the authoritative snapshot and replace local state wholesale.
    pub async fn refresh_status(&mut self) {
        match self.client.training_status().await {
            Ok(snapshot) => self.status.load(snapshot),
            Err(e) => {
                warn!("Status refresh failed: {}", e);
                self.status_message = Some("Could not load the training status".to_string());
            }
        }
    }

    /// Begin a new training session. The UI confirms with the user first.
    pub async fn start_training(&mut self) {
        match self.client.start_training().await {
            Ok(snapshot) => self.status.load(snapshot),
            Err(ClientError::Conflict) => {
                self.status_message = Some("A training is already active".to_string());
            }
            Err(ClientError::NotFound) => {
                self.status_message = Some("No available training was found".to_string());
            }
            Err(e) => {
                warn!("Start failed: {}", e);
                self.status_message = Some("Could not start a new training".to_string());
            }
        }
    }

    /// End the active session. Irreversible; the UI confirms first.
    pub async fn stop_training(&mut self) {
        match self.client.stop_training().await {
            Ok(snapshot) => self.status.load(snapshot),
            Err(ClientError::NotFound) => {
                self.status_message = Some("No active training was found".to_string());
            }
            Err(e) => {
                warn!("Stop failed: {}", e);
                self.status_message = Some("Could not stop the training".to_string());
            }
        }
    }

    pub async fn finish_exercise(&mut self, exercise_id: Uuid) {
        let result = self.client.finish_exercise(exercise_id).await;
        self.apply_exercise_result(result, "This exercise is already completed!");
    }

    pub async fn skip_exercise(&mut self, exercise_id: Uuid) {
        let result = self.client.skip_exercise(exercise_id).await;
        self.apply_exercise_result(result, "This exercise is already skipped!");
    }

    pub async fn restore_exercise(&mut self, exercise_id: Uuid) {
        let result = self.client.restore_exercise(exercise_id).await;
        self.apply_exercise_result(result, "This exercise is already restored!");
    }

    /// Shared outcome handling for finish/skip/restore. Exactly one notice
    /// per failure.
    fn apply_exercise_result(
        &mut self,
        result: Result<trainer_api::SessionStatus, ClientError>,
        conflict_notice: &str,
    ) {
        match result {
            Ok(snapshot) => self.status.load(snapshot),
            Err(ClientError::NotFound) => {
                self.status_message = Some("This exercise was not found!".to_string());
            }
            Err(ClientError::Conflict) => {
                self.status_message = Some(conflict_notice.to_string());
            }
            Err(e) => {
                warn!("Exercise update failed: {}", e);
                self.status_message = Some("Could not update the exercise".to_string());
            }
        }
    }

    /// Experience tiers for the sign-up form. `None` plus a notice on
    /// failure.
    pub async fn load_experiences(&mut self) -> Option<Vec<Experience>> {
        match self.client.list_experiences().await {
            Ok(experiences) => Some(experiences),
            Err(e) => {
                warn!("Experience list failed: {}", e);
                self.status_message = Some("Could not load experience levels".to_string());
                None
            }
        }
    }

    /// Trainer-only: ask the server for a fresh instructor invite code.
    pub async fn request_invite_code(&mut self) {
        match self.client.invite_code().await {
            Ok(code) => {
                self.status_message = Some(format!("Invite code: {}", code));
            }
            Err(e) => {
                warn!("Invite code failed: {}", e);
                self.status_message = Some("Could not generate an invite code".to_string());
            }
        }
    }

    /// Recompute the displayed countdown. Only the cooldown phase yields a
    /// value; every other phase clears it. Returns true when the window was
    /// reached on this tick, i.e. the caller should refresh the status.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        let next = self
            .status
            .countdown_at(now, self.auth.training_frequency())
            .map(|c| c.to_string());

        let reached =
            self.countdown.is_some() && next.is_none() && self.status.phase() == Phase::Cooldown;
        self.countdown = next;
        reached
    }
}
