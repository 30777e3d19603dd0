//! UNIX epoch to calendar time

use chrono::{DateTime, Utc};

/// Convert UNIX epoch seconds to a UTC calendar timestamp.
///
/// Total over `i64`: seconds outside chrono's representable range saturate
/// to `DateTime::<Utc>::MIN_UTC` or `MAX_UTC`.
pub fn calendar_from_unix(seconds: i64) -> DateTime<Utc> {
    match DateTime::<Utc>::from_timestamp(seconds, 0) {
        Some(time) => time,
        None if seconds < 0 => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_epoch_is_default() {
        assert_eq!(calendar_from_unix(0), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(calendar_from_unix(0), DateTime::<Utc>::default());
    }

    #[test]
    fn test_seconds_to_calendar() {
        let time = calendar_from_unix(1000);
        assert_eq!(time.timestamp(), 1000);
        assert_eq!((time.hour(), time.minute(), time.second()), (0, 16, 40));

        let time = calendar_from_unix(1_700_000_000);
        assert_eq!(time, Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap());
        assert_eq!(time.year(), 2023);
    }

    #[test]
    fn test_before_epoch() {
        assert_eq!(
            calendar_from_unix(-86_400),
            Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(calendar_from_unix(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(calendar_from_unix(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }
}
