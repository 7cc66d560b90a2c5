// Date utility functions
// Everything the widget shows or compares is Moscow wall time

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

/// The one zone the widget displays and compares in.
pub const DISPLAY_TZ: Tz = chrono_tz::Europe::Moscow;

/// Formats accepted for a typed date-time, tried in order. The first is what
/// a `datetime-local` input produces.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

pub fn to_display_tz(instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&DISPLAY_TZ)
}

pub fn is_same_day(date1: DateTime<Utc>, date2: DateTime<Utc>) -> bool {
    to_display_tz(date1).date_naive() == to_display_tz(date2).date_naive()
}

/// True when the instant reads exactly 00:00:00 on the wall clock.
pub fn is_midnight(instant: DateTime<Utc>) -> bool {
    let local = to_display_tz(instant);
    local.hour() == 0 && local.minute() == 0 && local.second() == 0
}

/// Parse user-entered wall time into an instant.
///
/// Returns `None` for anything unrecognised, including wall times the zone
/// database says never happened.
pub fn parse_date_time_input(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    let naive = INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    DISPLAY_TZ
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// Render a date the way the birthday list shows it: `dd.mm.yyyy, hh:mm`.
pub fn format_entry_date(instant: DateTime<Utc>) -> String {
    to_display_tz(instant).format("%d.%m.%Y, %H:%M").to_string()
}
