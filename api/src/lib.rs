//! Wire types for the trainer REST API.
//!
//! Shared between the HTTP client and any front end. Field names follow the
//! server's JSON: entity columns are snake_case, embedded relations keep the
//! server's camelCase spelling (the server still calls a training session a
//! "current").

pub mod auth;
pub mod catalog;
pub mod session;
pub mod user;

pub use auth::{SignInRequest, SignInResponse, SignUpRequest};
pub use catalog::{
    Category, CategoryData, Exercise, ExerciseData, Experience, ExperienceData, Training,
    TrainingData, TrainingItem, TrainingItemData,
};
pub use session::{Session, SessionExercise, SessionStatus};
pub use user::{Invite, User};
