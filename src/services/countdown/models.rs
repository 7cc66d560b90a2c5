use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Time left until a target, broken into display units. All zero once the
/// target has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Display strings for a countdown: days as-is, the rest two digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedCountdown {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Countdown {
    /// Break a positive number of seconds into units. Non-positive input is
    /// the expired state.
    pub fn from_seconds(diff: i64) -> Self {
        if diff <= 0 {
            return Self::default();
        }

        Self {
            days: (diff / SECONDS_PER_DAY) as u64,
            hours: ((diff / SECONDS_PER_HOUR) % 24) as u8,
            minutes: ((diff / SECONDS_PER_MINUTE) % 60) as u8,
            seconds: (diff % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days as i64 * SECONDS_PER_DAY
            + self.hours as i64 * SECONDS_PER_HOUR
            + self.minutes as i64 * SECONDS_PER_MINUTE
            + self.seconds as i64
    }

    pub fn is_expired(&self) -> bool {
        *self == Self::default()
    }

    pub fn padded(&self) -> PaddedCountdown {
        PaddedCountdown {
            days: self.days.to_string(),
            hours: format!("{:02}", self.hours),
            minutes: format!("{:02}", self.minutes),
            seconds: format!("{:02}", self.seconds),
        }
    }
}
