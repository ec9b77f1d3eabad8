//! Clock-time parsing and formatting.
//!
//! The planner works in `NaiveDateTime` throughout; the web layer takes
//! start times as "HH:MM" strings and renders timestamps back in the
//! same zero-padded 24-hour form.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Error returned when parsing an invalid clock-time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {reason}")]
pub struct ClockTimeError {
    reason: &'static str,
}

impl ClockTimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Render a timestamp as zero-padded 24-hour "HH:MM".
pub fn format_clock_time(timestamp: NaiveDateTime) -> String {
    format!("{:02}:{:02}", timestamp.hour(), timestamp.minute())
}

/// Parse an "HH:MM" clock time onto a given date.
///
/// The input must be exactly five characters with a colon at position
/// 2, hours 0-23 and minutes 0-59.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use walk_server::domain::parse_clock_time;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
/// let t = parse_clock_time("09:30", date).unwrap();
/// assert_eq!(t.to_string(), "2025-04-05 09:30:00");
///
/// assert!(parse_clock_time("930", date).is_err());
/// assert!(parse_clock_time("24:00", date).is_err());
/// ```
pub fn parse_clock_time(s: &str, date: NaiveDate) -> Result<NaiveDateTime, ClockTimeError> {
    if s.len() != 5 {
        return Err(ClockTimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();
    if bytes[2] != b':' {
        return Err(ClockTimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| ClockTimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(ClockTimeError::new("hour must be 0-23"));
    }

    let minute = parse_two_digits(&bytes[3..5])
        .ok_or_else(|| ClockTimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(ClockTimeError::new("minute must be 0-59"));
    }

    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ClockTimeError::new("invalid time"))?;

    Ok(date.and_time(time))
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 5).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = parse_clock_time("00:00", date()).unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));

        let t = parse_clock_time("23:59", date()).unwrap();
        assert_eq!((t.hour(), t.minute()), (23, 59));

        let t = parse_clock_time("09:05", date()).unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));
    }

    #[test]
    fn parse_invalid_format() {
        assert!(parse_clock_time("0900", date()).is_err());
        assert!(parse_clock_time("9:00", date()).is_err());
        assert!(parse_clock_time("09:000", date()).is_err());
        assert!(parse_clock_time("09-00", date()).is_err());
        assert!(parse_clock_time("ab:cd", date()).is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(parse_clock_time("24:00", date()).is_err());
        assert!(parse_clock_time("12:60", date()).is_err());
    }

    #[test]
    fn format_zero_padded() {
        let t = parse_clock_time("09:05", date()).unwrap();
        assert_eq!(format_clock_time(t), "09:05");

        let t = parse_clock_time("23:59", date()).unwrap();
        assert_eq!(format_clock_time(t), "23:59");
    }

    #[test]
    fn format_drops_seconds() {
        let t = date().and_hms_opt(9, 16, 30).unwrap();
        assert_eq!(format_clock_time(t), "09:16");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_clock()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Any valid HH:MM string parses, and formatting it back
        /// returns the original.
        #[test]
        fn parse_format_roundtrip(s in valid_clock()) {
            let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
            let parsed = parse_clock_time(&s, date).unwrap();
            prop_assert_eq!(format_clock_time(parsed), s);
        }

        /// Out-of-range hours are rejected.
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(parse_clock_time(&s, date).is_err());
        }

        /// Out-of-range minutes are rejected.
        #[test]
        fn invalid_minute_rejected(hour in 0u32..24, minute in 60u32..100) {
            let date = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(parse_clock_time(&s, date).is_err());
        }
    }
}
