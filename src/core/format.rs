// ScanShelf - core/format.rs
//
// Display strings for catalog columns. These are for rendering only and are
// never used as sort keys.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

/// Size units for `readable_size`, in 1024 steps.
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Format a count with comma thousands separators, e.g. `1234567` -> `1,234,567`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable byte size: `512 B`, `1.50 KB`, `3.25 MB`.
///
/// Bytes are shown as a whole number; larger units with two decimals.
pub fn readable_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", SIZE_UNITS[unit])
}

/// English ordinal suffix for a day of the month.
fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Format a timestamp as `Tue, Mar 5th at 3:07 pm` in the timestamp's zone.
pub fn format_datetime<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{} at {}",
        ts.format("%a, %b %-d"),
        ordinal_suffix(ts.day()),
        ts.format("%-I:%M %P")
    )
}

/// Format a capture time for display in the local timezone.
pub fn format_captured_at(ts: DateTime<Utc>) -> String {
    format_datetime(&ts.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_readable_size() {
        assert_eq!(readable_size(0), "0 B");
        assert_eq!(readable_size(1023), "1023 B");
        assert_eq!(readable_size(1536), "1.50 KB");
        assert_eq!(readable_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(readable_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_readable_size_caps_at_largest_unit() {
        assert!(readable_size(u64::MAX).ends_with(" TB"));
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_format_datetime() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 15, 7, 0).unwrap();
        assert_eq!(format_datetime(&ts), "Tue, Mar 5th at 3:07 pm");

        let ts = Utc.with_ymd_and_hms(2024, 1, 22, 0, 30, 0).unwrap();
        assert_eq!(format_datetime(&ts), "Mon, Jan 22nd at 12:30 am");
    }
}
