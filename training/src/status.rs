use chrono::{DateTime, Utc};
use trainer_api::{Session, SessionExercise, SessionStatus};

use crate::countdown::{next_window, Countdown};

/// The three mutually exclusive availability states a snapshot can imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A session is running.
    Active,
    /// No session running, a new one can be started.
    Ready,
    /// Nothing running, nothing available; waiting out the frequency window.
    Cooldown,
}

/// What happened to one exercise within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseOutcome {
    Pending,
    Completed,
    Skipped,
}

/// Derive the outcome from the server's timestamps. The server sets at most
/// one of them.
pub fn exercise_outcome(exercise: &SessionExercise) -> ExerciseOutcome {
    if exercise.concluded_at.is_some() {
        ExerciseOutcome::Completed
    } else if exercise.exited_at.is_some() {
        ExerciseOutcome::Skipped
    } else {
        ExerciseOutcome::Pending
    }
}

/// The latest availability snapshot, as the server reported it.
///
/// The server is the source of truth — every load replaces all three fields
/// wholesale, and nothing here is validated or merged locally.
#[derive(Debug, Clone, Default)]
pub struct TrainingStatus {
    active: Option<Session>,
    has_available: bool,
    last_finished: Option<DateTime<Utc>>,
}

impl TrainingStatus {
    /// Replace the whole state with a fresh snapshot.
    pub fn load(&mut self, snapshot: SessionStatus) {
        self.active = snapshot.active;
        self.has_available = snapshot.has_available;
        self.last_finished = snapshot.last_finished;
    }

    /// Drop everything, e.g. on sign-out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn has_available(&self) -> bool {
        self.has_available
    }

    pub fn last_finished(&self) -> Option<DateTime<Utc>> {
        self.last_finished
    }

    /// Exactly one phase holds for any snapshot: an active session wins,
    /// then availability, then cooldown.
    pub fn phase(&self) -> Phase {
        if self.active.is_some() {
            Phase::Active
        } else if self.has_available {
            Phase::Ready
        } else {
            Phase::Cooldown
        }
    }

    /// When the next session becomes available, if the last finish time is
    /// known.
    pub fn next_window(&self, frequency_minutes: i64) -> Option<DateTime<Utc>> {
        self.last_finished
            .map(|finished| next_window(finished, frequency_minutes))
    }

    /// The live countdown. Only meaningful while cooling down; any other
    /// phase clears it.
    pub fn countdown_at(&self, now: DateTime<Utc>, frequency_minutes: i64) -> Option<Countdown> {
        if self.phase() != Phase::Cooldown {
            return None;
        }
        let target = self.next_window(frequency_minutes)?;
        Countdown::remaining(target, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn session() -> Session {
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

    fn session_exercise() -> SessionExercise {
        SessionExercise {
            id: Uuid::new_v4(),
            concluded_at: None,
            exited_at: None,
            times: 12,
            series: 3,
            current_id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            exercise: None,
        }
    }

    #[test]
    fn test_phase_active_wins() {
        let mut status = TrainingStatus::default();
        status.load(SessionStatus {
            active: Some(session()),
            has_available: true,
            last_finished: Some(at(0)),
        });
        assert_eq!(status.phase(), Phase::Active);
    }

    #[test]
    fn test_phase_ready_then_cooldown() {
        let mut status = TrainingStatus::default();
        status.load(SessionStatus {
            active: None,
            has_available: true,
            last_finished: None,
        });
        assert_eq!(status.phase(), Phase::Ready);

        status.load(SessionStatus {
            active: None,
            has_available: false,
            last_finished: Some(at(0)),
        });
        assert_eq!(status.phase(), Phase::Cooldown);
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let mut status = TrainingStatus::default();
        status.load(SessionStatus {
            active: Some(session()),
            has_available: false,
            last_finished: Some(at(0)),
        });

        // Null fields in the new snapshot overwrite, never merge.
        status.load(SessionStatus::default());
        assert!(status.active().is_none());
        assert!(!status.has_available());
        assert!(status.last_finished().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut status = TrainingStatus::default();
        status.load(SessionStatus {
            active: None,
            has_available: true,
            last_finished: Some(at(0)),
        });
        status.clear();
        assert_eq!(status.phase(), Phase::Cooldown);
        assert!(status.last_finished().is_none());
    }

    #[test]
    fn test_countdown_only_while_cooling_down() {
        let mut status = TrainingStatus::default();
        status.load(SessionStatus {
            active: None,
            has_available: false,
            last_finished: Some(at(0)),
        });
        let countdown = status.countdown_at(at(89 * 60), 90).unwrap();
        assert_eq!(countdown.to_string(), "1m 0s");

        // Same clock, but a session became available: countdown is cleared.
        status.load(SessionStatus {
            active: None,
            has_available: true,
            last_finished: Some(at(0)),
        });
        assert_eq!(status.countdown_at(at(89 * 60), 90), None);

        // And an active session clears it too.
        status.load(SessionStatus {
            active: Some(session()),
            has_available: false,
            last_finished: Some(at(0)),
        });
        assert_eq!(status.countdown_at(at(89 * 60), 90), None);
    }

    #[test]
    fn test_countdown_absent_without_last_finished() {
        let status = TrainingStatus::default();
        assert_eq!(status.countdown_at(at(0), 90), None);
    }

    #[test]
    fn test_countdown_absent_after_the_window() {
        let mut status = TrainingStatus::default();
        status.load(SessionStatus {
            active: None,
            has_available: false,
            last_finished: Some(at(0)),
        });
        assert_eq!(status.countdown_at(at(90 * 60), 90), None);
    }

    #[test]
    fn test_exercise_outcome_from_timestamps() {
        let mut exercise = session_exercise();
        assert_eq!(exercise_outcome(&exercise), ExerciseOutcome::Pending);

        exercise.concluded_at = Some(at(10));
        assert_eq!(exercise_outcome(&exercise), ExerciseOutcome::Completed);

        exercise.concluded_at = None;
        exercise.exited_at = Some(at(10));
        assert_eq!(exercise_outcome(&exercise), ExerciseOutcome::Skipped);
    }
}
