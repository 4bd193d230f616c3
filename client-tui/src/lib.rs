pub mod config;
pub mod phone_file;
pub mod state;
pub mod ui;

pub use state::{AppSession, AuthState};
