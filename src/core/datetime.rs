//! Date parsing for entry recording.
//!
//! Habit entries are recorded for days in the past ("I did this yesterday"),
//! so unlike a scheduling parser everything here resolves backward from the
//! reference date. The reference date is always passed in by the caller to
//! keep parsing deterministic and testable.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

static DAYS_AGO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s+days?\s+ago$").unwrap_or_else(|e| panic!("Invalid days-ago regex: {e}"))
});

/// Parse a natural language date for recording an entry.
///
/// Supports patterns like:
/// - `today`, `yesterday`
/// - `3 days ago`
/// - `monday`, `last monday` (most recent past occurrence)
/// - `2024-12-15` (ISO format)
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_entry_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {},
    }

    // "N days ago"
    if let Some(caps) = DAYS_AGO_PATTERN.captures(&input) {
        let amount: i64 = caps.get(1)?.as_str().parse().ok()?;
        return Some(today - Duration::days(amount));
    }

    // Weekday names resolve to the most recent past occurrence
    if let Some(date) = parse_weekday(&input, today) {
        return Some(date);
    }

    // ISO format (2024-12-15)
    NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok()
}

/// Parse weekday names, walking backward from the reference date.
///
/// A bare weekday matching today resolves to today; "last monday" always
/// goes at least one week back when today is Monday.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_last, day_str) = input
        .strip_prefix("last ")
        .map_or((false, input), |rest| (true, rest));

    let target_weekday = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let mut days_back = (i64::from(today.weekday().num_days_from_sunday())
        - i64::from(target_weekday.num_days_from_sunday())
        + 7)
        % 7;

    if is_last && days_back == 0 {
        days_back = 7;
    }

    Some(today - Duration::days(days_back))
}
