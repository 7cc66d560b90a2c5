mod models;

use chrono::{DateTime, Utc};

pub use models::{
    Countdown, PaddedCountdown, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Time remaining from `now` until `target`, floored to whole seconds and
/// clamped at zero.
pub fn countdown(now: DateTime<Utc>, target: DateTime<Utc>) -> Countdown {
    let remaining = target.signed_duration_since(now);
    // num_seconds truncates toward zero, which is a floor for the positive
    // side; anything at or below zero is expired either way.
    Countdown::from_seconds(remaining.num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 31, h, m, s).unwrap()
    }

    #[test]
    fn test_breakdown_of_mixed_units() {
        let now = at(0, 0, 0);
        let target = now
            + Duration::days(3)
            + Duration::hours(4)
            + Duration::minutes(5)
            + Duration::seconds(6);
        assert_eq!(
            countdown(now, target),
            Countdown {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
    }

    #[test]
    fn test_sub_second_remainder_is_floored() {
        let now = at(23, 59, 58);
        let target = now + Duration::milliseconds(1999);
        assert_eq!(countdown(now, target).seconds, 1);
    }

    #[test]
    fn test_expired_target_is_all_zero() {
        let now = at(12, 0, 0);
        assert!(countdown(now, now).is_expired());
        assert!(countdown(now, now - Duration::days(400)).is_expired());
        assert!(countdown(now, now + Duration::milliseconds(500)).is_expired());
    }

    #[test]
    fn test_total_seconds_round_trip() {
        let now = at(1, 2, 3);
        let target = now + Duration::seconds(1_000_000);
        assert_eq!(countdown(now, target).total_seconds(), 1_000_000);
    }

    #[test]
    fn test_padded_strings() {
        let padded = Countdown {
            days: 123,
            hours: 4,
            minutes: 0,
            seconds: 9,
        }
        .padded();
        assert_eq!(padded.days, "123");
        assert_eq!(padded.hours, "04");
        assert_eq!(padded.minutes, "00");
        assert_eq!(padded.seconds, "09");
    }
}
