use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// The instant the next training becomes available after a finished one.
pub fn next_window(last_finished: DateTime<Utc>, frequency_minutes: i64) -> DateTime<Utc> {
    last_finished + Duration::minutes(frequency_minutes)
}

/// Remaining time until the next training window, split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Time left from `now` until `target`, or `None` once the window has
    /// been reached. Less than one whole second left counts as reached.
    pub fn remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let total = (target - now).num_seconds();
        if total <= 0 {
            return None;
        }

        Some(Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        })
    }
}

impl fmt::Display for Countdown {
    /// Space-joined tokens, largest unit first. A unit is printed when it or
    /// the next-larger unit is non-zero: `1d 0h 3m 4s`, `1m 0s`, `42s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();

        if self.days != 0 {
            tokens.push(format!("{}d", self.days));
        }
        if self.days != 0 || self.hours != 0 {
            tokens.push(format!("{}h", self.hours));
        }
        if self.hours != 0 || self.minutes != 0 {
            tokens.push(format!("{}m", self.minutes));
        }
        if self.minutes != 0 || self.seconds != 0 {
            tokens.push(format!("{}s", self.seconds));
        }

        write!(f, "{}", tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_next_window_adds_frequency() {
        let finished = at(0);
        assert_eq!(next_window(finished, 90), at(90 * 60));
    }

    #[test]
    fn test_remaining_none_once_reached() {
        assert_eq!(Countdown::remaining(at(0), at(0)), None);
        assert_eq!(Countdown::remaining(at(0), at(10)), None);
    }

    #[test]
    fn test_remaining_sub_second_counts_as_reached() {
        let target = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
        assert_eq!(Countdown::remaining(target, at(0)), None);
    }

    #[test]
    fn test_one_minute_before_the_window() {
        // Finished at T, frequency 90m, clock at T+89m.
        let target = next_window(at(0), 90);
        let now = at(89 * 60);
        let countdown = Countdown::remaining(target, now).unwrap();
        assert_eq!(countdown.to_string(), "1m 0s");
    }

    #[test]
    fn test_at_the_window_is_absent() {
        let target = next_window(at(0), 90);
        assert_eq!(Countdown::remaining(target, at(90 * 60)), None);
        assert_eq!(Countdown::remaining(target, at(91 * 60)), None);
    }

    #[test]
    fn test_full_split() {
        let total = 86_400 + 2 * 3_600 + 3 * 60 + 4;
        let countdown = Countdown::remaining(at(total), at(0)).unwrap();
        assert_eq!(countdown.to_string(), "1d 2h 3m 4s");
    }

    #[test]
    fn test_zero_hours_shown_under_days() {
        let total = 86_400 + 3 * 60 + 4;
        let countdown = Countdown::remaining(at(total), at(0)).unwrap();
        assert_eq!(countdown.to_string(), "1d 0h 3m 4s");
    }

    #[test]
    fn test_seconds_only() {
        let countdown = Countdown::remaining(at(42), at(0)).unwrap();
        assert_eq!(countdown.to_string(), "42s");
    }

    #[test]
    fn test_whole_hour_omits_trailing_seconds() {
        let countdown = Countdown::remaining(at(3_600), at(0)).unwrap();
        assert_eq!(countdown.to_string(), "1h 0m");
    }
}
