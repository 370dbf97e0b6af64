//! Timetable clock times.
//!
//! GTFS stop times are written as "HH:MM:SS" and may run past midnight
//! ("25:10:00" is ten past one on the following morning). Routing only needs
//! minute resolution, so times are normalized to minutes since midnight of
//! the service day and seconds are dropped.

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an "H:MM", "HH:MM" or "HH:MM:SS" time into minutes since midnight.
///
/// Hours are not capped at 23. Seconds must be present as two digits if the
/// third component exists, but their value is ignored.
///
/// # Examples
///
/// ```
/// use tram_router::domain::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("06:15:00"), Ok(375));
/// assert_eq!(parse_clock_minutes("6:15"), Ok(375));
/// assert_eq!(parse_clock_minutes("25:10:30"), Ok(1510));
///
/// assert!(parse_clock_minutes("0615").is_err());
/// assert!(parse_clock_minutes("06:75").is_err());
/// ```
pub fn parse_clock_minutes(s: &str) -> Result<u32, TimeError> {
    let mut parts = s.trim().split(':');

    let hours = parts
        .next()
        .ok_or_else(|| TimeError::new("expected HH:MM format"))?;
    let minutes = parts
        .next()
        .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

    if let Some(seconds) = parts.next() {
        let secs = parse_digits(seconds, 2, 2).ok_or_else(|| TimeError::new("invalid seconds"))?;
        if secs > 59 {
            return Err(TimeError::new("seconds must be 0-59"));
        }
    }
    if parts.next().is_some() {
        return Err(TimeError::new("too many components"));
    }

    let hour = parse_digits(hours, 1, 2).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    let minute =
        parse_digits(minutes, 2, 2).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    Ok(hour * 60 + minute)
}

/// Parse between `min` and `max` ASCII digits.
fn parse_digits(s: &str, min: usize, max: usize) -> Option<u32> {
    if s.len() < min || s.len() > max {
        return None;
    }
    s.bytes().try_fold(0u32, |acc, b| {
        let d = (b as char).to_digit(10)?;
        Some(acc * 10 + d)
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting hours and minutes then parsing recovers the total
        #[test]
        fn formatted_times_parse(h in 0u32..48, m in 0u32..60, s in 0u32..60) {
            let text = format!("{:02}:{:02}:{:02}", h, m, s);
            prop_assert_eq!(parse_clock_minutes(&text), Ok(h * 60 + m));
        }
    }
}
