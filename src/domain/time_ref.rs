//! Reference-date parsing for command-line input

use crate::domain::week_of;
use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A user-supplied day, relative to "today" or absolute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of the weekday, today included
    Weekday(Weekday),
    /// Occurrence strictly before today
    LastWeekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    /// ISO date (YYYY-MM-DD)
    Date(NaiveDate),
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

impl TimeReference {
    /// Parse a time reference string such as `today`, `last friday` or `2024-06-13`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MoodlogError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return parse_weekday(rest.trim())
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(TimeReference::Date)
            .map_err(|_| invalid())
    }

    /// Resolve against `today`. Fails when the result leaves the calendar.
    pub fn resolve(&self, today: NaiveDate) -> Result<NaiveDate> {
        let from_monday = |w: Weekday| i64::from(w.num_days_from_monday());
        let current = from_monday(today.weekday());

        let offset = match *self {
            TimeReference::Date(date) => return Ok(date),
            TimeReference::Today => 0,
            TimeReference::Yesterday => -1,
            TimeReference::Tomorrow => 1,
            TimeReference::Weekday(target) => -(current - from_monday(target)).rem_euclid(7),
            TimeReference::LastWeekday(target) => {
                let back = (current - from_monday(target)).rem_euclid(7);
                -(if back == 0 { 7 } else { back })
            }
            TimeReference::NextWeekday(target) => {
                let ahead = (from_monday(target) - current).rem_euclid(7);
                if ahead == 0 {
                    7
                } else {
                    ahead
                }
            }
        };

        today
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(|| MoodlogError::InvalidTimeReference(format!("{:?} from {}", self, today)))
    }
}

/// Parse an optional reference and resolve it, defaulting to `today`.
///
/// The resolved day must sit in a week that fits in the calendar, so every
/// accepted reference can be shown as a week.
pub fn resolve_reference(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let invalid = || MoodlogError::InvalidTimeReference(input.unwrap_or("today").to_string());

    let day = match input {
        Some(text) => TimeReference::parse(text)?
            .resolve(today)
            .map_err(|_| invalid())?,
        None => today,
    };
    week_of(day).map_err(|_| invalid())?;
    Ok(day)
}
