// Test fixtures - reusable test data
// Instants are built from Moscow wall time, the zone the widget runs in

#![allow(dead_code)]

use birthday_clock::utils::date::DISPLAY_TZ;
use chrono::{DateTime, TimeZone, Utc};

/// Moscow wall time as an instant
pub fn moscow(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    DISPLAY_TZ
        .with_ymd_and_hms(y, mo, d, h, mi, s)
        .unwrap()
        .with_timezone(&Utc)
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Ann's birthday, 2025-06-01 00:00 Moscow
    pub fn ann_birthday() -> DateTime<Utc> {
        moscow(2025, 6, 1, 0, 0, 0)
    }

    /// One second before Ann's birthday
    pub fn eve_last_second() -> DateTime<Utc> {
        moscow(2025, 5, 31, 23, 59, 59)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> DateTime<Utc> {
        moscow(2024, 2, 29, 12, 0, 0)
    }
}

/// Form input as the shell submits it
pub mod inputs {
    pub const ANN: (&str, &str) = ("Ann", "2025-06-01T00:00");
    pub const FAR_FUTURE: (&str, &str) = ("Ann", "2030-01-01T00:00");
}
