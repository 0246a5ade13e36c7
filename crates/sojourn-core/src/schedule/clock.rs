//! Wall-clock arithmetic over `HH:mm` strings.
//!
//! These functions treat times as minute offsets within a nominal day.
//! Input strings are not validated: a malformed component is read as 0 and
//! the result is unspecified. Durations that cross midnight wrap modulo
//! 24h without tracking the day overflow.

/// Split an `HH:mm` string into hour and minute components.
pub fn parse_time(time: &str) -> (i64, i64) {
    let mut parts = time.splitn(2, ':');
    let hours = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let minutes = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    (hours, minutes)
}

/// Format hour and minute components as a zero-padded `HH:mm` string.
pub fn format_time(hours: i64, minutes: i64) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Minutes since midnight for an `HH:mm` string.
pub fn minutes_of_day(time: &str) -> i64 {
    let (hours, minutes) = parse_time(time);
    hours * 60 + minutes
}

/// Advance a time by a signed number of minutes, wrapping at midnight.
///
/// ```
/// use sojourn_core::schedule::clock::add_minutes;
///
/// assert_eq!(add_minutes("09:00", 90), "10:30");
/// assert_eq!(add_minutes("23:50", 20), "00:10");
/// ```
pub fn add_minutes(time: &str, minutes: i64) -> String {
    let total = (minutes_of_day(time) + minutes).rem_euclid(24 * 60);
    format_time(total / 60, total % 60)
}

/// Signed minute difference `end - start` on the same nominal day.
///
/// No wraparound correction is applied: if `end` is earlier than `start`
/// the result is negative, which gap-walking callers treat as "no gap".
pub fn minutes_between(start: &str, end: &str) -> i64 {
    minutes_of_day(end) - minutes_of_day(start)
}

/// Half-open interval membership: `start <= time < end`.
pub fn is_in_range(time: &str, start: &str, end: &str) -> bool {
    let t = minutes_of_day(time);
    t >= minutes_of_day(start) && t < minutes_of_day(end)
}

/// Render a minute count as a compact human duration.
///
/// ```
/// use sojourn_core::schedule::clock::format_duration;
///
/// assert_eq!(format_duration(45), "45min");
/// assert_eq!(format_duration(60), "1h");
/// assert_eq!(format_duration(90), "1h 30min");
/// ```
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}min")
    }
}

/// Render a start time plus duration as an `HH:mm - HH:mm` range.
pub fn format_time_range(start: &str, duration: u32) -> String {
    format!("{} - {}", start, add_minutes(start, i64::from(duration)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_round_trip() {
        assert_eq!(parse_time("09:05"), (9, 5));
        assert_eq!(format_time(9, 5), "09:05");
        assert_eq!(format_time(0, 0), "00:00");
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day("00:00"), 0);
        assert_eq!(minutes_of_day("13:45"), 13 * 60 + 45);
    }

    #[test]
    fn test_add_minutes_plain() {
        assert_eq!(add_minutes("09:00", 90), "10:30");
        assert_eq!(add_minutes("08:00", 0), "08:00");
    }

    #[test]
    fn test_add_minutes_wraps_past_midnight() {
        assert_eq!(add_minutes("23:50", 20), "00:10");
        // a multi-day delta silently wraps
        assert_eq!(add_minutes("10:00", 24 * 60 + 30), "10:30");
    }

    #[test]
    fn test_add_minutes_negative_delta() {
        assert_eq!(add_minutes("00:10", -20), "23:50");
    }

    #[test]
    fn test_minutes_between_is_signed() {
        assert_eq!(minutes_between("09:00", "10:30"), 90);
        assert_eq!(minutes_between("10:30", "09:00"), -90);
        assert_eq!(minutes_between("12:00", "12:00"), 0);
    }

    #[test]
    fn test_is_in_range_half_open() {
        assert!(is_in_range("10:00", "10:00", "11:00"));
        assert!(is_in_range("10:59", "10:00", "11:00"));
        assert!(!is_in_range("11:00", "10:00", "11:00"));
        assert!(!is_in_range("09:59", "10:00", "11:00"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45min");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30min");
        assert_eq!(format_duration(0), "0min");
        assert_eq!(format_duration(120), "2h");
    }

    #[test]
    fn test_format_time_range() {
        assert_eq!(format_time_range("09:00", 90), "09:00 - 10:30");
    }
}
