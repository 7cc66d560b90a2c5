//! Time source and Moscow clock face formatting.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date::to_display_tz;

/// Where "now" comes from. The ticker samples it once per tick.
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host's system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Zero-padded hour/minute/second strings for the clock face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl std::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Moscow wall-clock reading of an instant.
pub fn format_time(instant: DateTime<Utc>) -> ClockReading {
    let local = to_display_tz(instant);
    // Leap seconds surface as second 59 with a nanosecond overflow, so the
    // second field already stays within 00-59.
    ClockReading {
        hours: format!("{:02}", local.hour()),
        minutes: format!("{:02}", local.minute()),
        seconds: format!("{:02}", local.second()),
    }
}
