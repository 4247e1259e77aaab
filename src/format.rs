//! Display Helpers
//!
//! Pure functions behind the numbers shown on project cards and the
//! statistics bar.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::PLACEHOLDER_IMAGE;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Thousands separator used by the `ru-RU` number format
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Funding progress in whole percent, rounded half up. Zero for a
/// non-positive goal. May exceed 100 for over-funded projects.
pub fn progress_percent(raised: f64, goal: f64) -> u32 {
    if !(goal > 0.0) || !raised.is_finite() {
        return 0;
    }
    let percent = (raised / goal * 100.0).round();
    if percent <= 0.0 {
        0
    } else {
        percent.min(u32::MAX as f64) as u32
    }
}

/// Width of the progress bar fill, clamped to 100%
pub fn progress_width(percent: u32) -> u32 {
    percent.min(100)
}

/// Parse a backend timestamp: RFC 3339, or naive ISO-8601 taken as UTC
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days until the deadline, rounded up; never negative.
/// Unparseable deadlines count as already passed.
pub fn days_left(deadline: &str, now: DateTime<Utc>) -> i64 {
    let Some(deadline) = parse_deadline(deadline) else {
        return 0;
    };
    let millis = (deadline - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + DAY_MS - 1) / DAY_MS
    }
}

/// Floor to an integer and group thousands: `1234.9` -> `"1 234"`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let whole = amount.floor() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Only http(s) and site-relative image URLs reach an `<img src>`
pub fn safe_image_url(url: Option<&str>) -> String {
    let url = url.map(str::trim).unwrap_or("");
    let lower = url.to_ascii_lowercase();
    let allowed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || (url.starts_with('/') && !url.starts_with("//"));
    if allowed {
        url.to_string()
    } else {
        PLACEHOLDER_IMAGE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(250.0, 1000.0), 25);
        assert_eq!(progress_percent(1.0, 3.0), 33);
        assert_eq!(progress_percent(2.0, 3.0), 67);
        assert_eq!(progress_percent(100.0, 0.0), 0);
        assert_eq!(progress_percent(-5.0, 100.0), 0);
        assert_eq!(progress_percent(2500.0, 1000.0), 250);
    }

    #[test]
    fn test_progress_width_is_clamped() {
        assert_eq!(progress_width(25), 25);
        assert_eq!(progress_width(100), 100);
        assert_eq!(progress_width(250), 100);
    }

    #[test]
    fn test_days_left() {
        let in_three_days = (now() + Duration::days(3)).format("%Y-%m-%dT%H:%M:%S").to_string();
        assert_eq!(days_left(&in_three_days, now()), 3);

        let almost_three = (now() + Duration::days(2) + Duration::hours(1)).to_rfc3339();
        assert_eq!(days_left(&almost_three, now()), 3);

        assert_eq!(days_left("2020-01-01T00:00:00", now()), 0);
        assert_eq!(days_left("not a date", now()), 0);
    }

    #[test]
    fn test_parse_deadline_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_deadline("2025-04-01T00:00:00"), Some(expected));
        assert_eq!(parse_deadline("2025-04-01T00:00:00.000000"), Some(expected));
        assert_eq!(parse_deadline("2025-04-01T03:00:00+03:00"), Some(expected));
        assert_eq!(parse_deadline("2025-04-01"), Some(expected));
    }

    #[test]
    fn test_format_currency_floors_and_groups() {
        assert_eq!(format_currency(1234.9), "1\u{a0}234");
        assert_eq!(format_currency(0.99), "0");
        assert_eq!(format_currency(999.0), "999");
        assert_eq!(format_currency(1_250_000.5), "1\u{a0}250\u{a0}000");
        assert_eq!(format_currency(-1500.2), "-1\u{a0}501");
        assert_eq!(format_currency(f64::NAN), "0");
    }

    #[test]
    fn test_safe_image_url() {
        assert_eq!(safe_image_url(Some("https://cdn.example.com/a.png")), "https://cdn.example.com/a.png");
        assert_eq!(safe_image_url(Some("/static/a.png")), "/static/a.png");
        assert_eq!(safe_image_url(Some("javascript:alert(1)")), PLACEHOLDER_IMAGE);
        assert_eq!(safe_image_url(Some("//evil.example/x.png")), PLACEHOLDER_IMAGE);
        assert_eq!(safe_image_url(None), PLACEHOLDER_IMAGE);
    }
}
