//! Model-level tests: the app session driven against the mock service.

use chrono::{DateTime, TimeZone, Utc};
use client_tui::{phone_file, AppSession};
use trainer_client::{
    ClientError, MockCall, MockTrainerService, Session, SessionStatus, SignInResponse,
};
use uuid::Uuid;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn active_session() -> Session {
    Session {
        id: Uuid::new_v4(),
        started_at: at(0),
        ended_at: None,
        training_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        training: None,
        exercises: Some(vec![]),
    }
}

fn cooldown_status() -> SessionStatus {
    SessionStatus {
        active: None,
        has_available: false,
        last_finished: Some(at(0)),
    }
}

#[tokio::test]
async fn short_phone_is_rejected_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = AppSession::new(MockTrainerService::new(), dir.path().to_path_buf());

    let signed_in = session.sign_in("123456789").await;

    assert!(!signed_in);
    assert_eq!(
        session.status_message.as_deref(),
        Some("Invalid phone number!")
    );
    assert!(session.client().get_calls().is_empty());
}

#[tokio::test]
async fn sign_in_installs_token_and_persists_phone() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new().with_available_training();
    let mut session = AppSession::new(mock, dir.path().to_path_buf());

    let signed_in = session.sign_in("(11) 98888-7777").await;

    assert!(signed_in);
    assert!(session.auth.authenticated);
    assert_eq!(
        phone_file::load_phone_number(dir.path()).unwrap().as_deref(),
        Some("11988887777")
    );
    assert_eq!(
        session.client().get_calls(),
        vec![
            MockCall::SignIn {
                phone_number: "11988887777".to_string()
            },
            MockCall::SetToken { present: true },
            MockCall::TrainingStatus,
        ]
    );
    assert!(session.status.has_available());
}

#[tokio::test]
async fn unknown_phone_flags_needs_sign_up() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new().with_sign_in_response(|| Err(ClientError::Unauthorized));
    let mut session = AppSession::new(mock, dir.path().to_path_buf());

    let signed_in = session.sign_in("11988887777").await;

    assert!(!signed_in);
    assert!(session.auth.needs_sign_up);
    assert!(session.status_message.is_none());
    assert!(!session
        .client()
        .get_calls()
        .contains(&MockCall::SetToken { present: true }));
}

#[tokio::test]
async fn start_conflict_shows_notice_and_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new()
        .with_available_training()
        .with_start_response(|| Err(ClientError::Conflict));
    let mut session = AppSession::new(mock, dir.path().to_path_buf());
    session.sign_in("11988887777").await;

    session.start_training().await;

    assert_eq!(
        session.status_message.as_deref(),
        Some("A training is already active")
    );
    // The failed request left the snapshot untouched.
    assert!(session.status.has_available());
    assert!(session.status.active().is_none());
}

#[tokio::test]
async fn stop_without_active_training_shows_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new().with_stop_response(|| Err(ClientError::NotFound));
    let mut session = AppSession::new(mock, dir.path().to_path_buf());

    session.stop_training().await;

    assert_eq!(
        session.status_message.as_deref(),
        Some("No active training was found")
    );
}

#[tokio::test]
async fn finish_conflict_shows_exactly_one_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new().with_finish_response(|| Err(ClientError::Conflict));
    let mut session = AppSession::new(mock, dir.path().to_path_buf());

    session.finish_exercise(Uuid::new_v4()).await;

    assert_eq!(
        session.status_message.as_deref(),
        Some("This exercise is already completed!")
    );
}

#[tokio::test]
async fn sign_up_conflict_keeps_needs_sign_up() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new()
        .with_sign_in_response(|| Err(ClientError::Unauthorized))
        .with_sign_up_response(|| Err(ClientError::Conflict));
    let mut session = AppSession::new(mock, dir.path().to_path_buf());
    session.sign_in("11988887777").await;

    let data = trainer_client::SignUpRequest {
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        phone_number: "(11) 98888-7777".to_string(),
        experience_id: Uuid::new_v4(),
        is_trainer: None,
        invite_code: None,
    };
    let registered = session.sign_up(data).await;

    assert!(!registered);
    assert!(session.auth.needs_sign_up);
    assert_eq!(
        session.status_message.as_deref(),
        Some("This phone number is already registered!")
    );
}

#[tokio::test]
async fn sign_out_clears_identity_and_resume_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new().with_available_training();
    let mut session = AppSession::new(mock, dir.path().to_path_buf());
    session.sign_in("11988887777").await;
    assert!(session.auth.authenticated);

    session.sign_out();

    assert!(!session.auth.authenticated);
    assert!(session.auth.user.is_none());
    assert_eq!(phone_file::load_phone_number(dir.path()).unwrap(), None);
    assert_eq!(
        session.client().get_calls().last(),
        Some(&MockCall::SetToken { present: false })
    );

    // Resume after sign-out: no persisted identity, no sign-in request.
    session.client().clear_calls();
    session.resume().await;
    assert!(!session.auth.authenticated);
    assert_eq!(
        session.client().get_calls(),
        vec![MockCall::SetToken { present: false }]
    );
}

#[tokio::test]
async fn resume_failure_forces_sign_out() {
    let dir = tempfile::tempdir().unwrap();
    phone_file::save_phone_number(dir.path(), "11988887777").unwrap();

    let mock = MockTrainerService::new().with_sign_in_response(|| {
        Err(ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        })
    });
    let mut session = AppSession::new(mock, dir.path().to_path_buf());

    session.resume().await;

    assert!(!session.auth.authenticated);
    assert_eq!(phone_file::load_phone_number(dir.path()).unwrap(), None);
}

#[tokio::test]
async fn countdown_ticks_only_while_cooling_down() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTrainerService::new()
        .with_sign_in_response(|| {
            Ok(SignInResponse {
                token: "test-token-001".to_string(),
                user: trainer_client::sample_user(),
            })
        })
        .with_status_response(|| Ok(cooldown_status()));
    let mut session = AppSession::new(mock, dir.path().to_path_buf());
    session.sign_in("11988887777").await;

    // sample_user trains every 90 minutes; one minute to go.
    assert!(!session.tick(at(89 * 60)));
    assert_eq!(session.countdown.as_deref(), Some("1m 0s"));

    // Window reached: countdown clears and the caller is told to refresh.
    assert!(session.tick(at(90 * 60)));
    assert_eq!(session.countdown, None);

    // Once more with an active session: no countdown, no refresh signal.
    session.status.load(SessionStatus {
        active: Some(active_session()),
        has_available: false,
        last_finished: Some(at(0)),
    });
    assert!(!session.tick(at(89 * 60)));
    assert_eq!(session.countdown, None);
}
