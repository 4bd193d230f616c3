pub mod countdown;
pub mod phone;
pub mod status;

pub use countdown::{next_window, Countdown};
pub use phone::{is_valid, mask, normalize};
pub use status::{exercise_outcome, ExerciseOutcome, Phase, TrainingStatus};
