//! Error types for the trainer client

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// What a request against the trainer server can fail with.
///
/// The server leans on plain status codes: 401 doubles as "needs sign-up"
/// on the sign-in path and "bad invite code" on sign-up, 404 means the
/// entity vanished, 409 means the state already transitioned (or a name is
/// taken). Nothing is ever retried; callers map these to user notices.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not authorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Conflict")]
    Conflict,

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Server returned invalid data: {0}")]
    InvalidData(String),

    #[error("Mock response not configured for: {0}")]
    NotConfigured(String),
}
