//! Monday-to-Sunday week windows

use crate::error::{MoodlogError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Calendar week running from Monday (`start`) to Sunday (`end`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Resolve the week containing `reference`.
///
/// Fails only at the edges of the calendar, where the Monday or the Sunday of
/// the week is not a representable date.
pub fn week_of(reference: NaiveDate) -> Result<WeekWindow> {
    let back = Duration::days(i64::from(reference.weekday().num_days_from_monday()));
    let start = reference.checked_sub_signed(back);
    let end = start.and_then(|start| start.checked_add_signed(Duration::days(6)));

    match (start, end) {
        (Some(start), Some(end)) => Ok(WeekWindow { start, end }),
        _ => Err(MoodlogError::InvalidTimeReference(format!(
            "{} (week falls outside the supported calendar)",
            reference
        ))),
    }
}

impl WeekWindow {
    /// Whether `date` lies inside the window (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The seven dates of the week, Monday first
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(7)
    }
}
