//! Trainer REST client library
//!
//! Provides a high-level async client for communicating with the trainer
//! server. Can be used by the TUI, a web UI, or any other client
//! application.
//!
//! # Example
//!
//! ```no_run
//! use trainer_client::{TrainerClient, TrainerService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = TrainerClient::new("http://localhost:3333");
//!     let auth = client.sign_in("11988887777").await?;
//!     client.set_token(Some(auth.token));
//!     let status = client.training_status().await?;
//!     println!("Training available: {}", status.has_available);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod traits;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use client::TrainerClient;
pub use error::{ClientError, ClientResult};
pub use traits::TrainerService;

#[cfg(any(test, feature = "mock"))]
pub use mock::{sample_user, MockCall, MockTrainerService};

// Re-export wire types for convenience
pub use trainer_api::*;
