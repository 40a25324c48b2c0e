//! Mood entry value type

use crate::domain::Emotion;
use crate::error::{MoodlogError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Longest note accepted, in characters
pub const MAX_NOTE_CHARS: usize = 300;

/// A single recorded mood. Never edited after it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    /// Authoritative ordering key, second precision
    pub timestamp: NaiveDateTime,
    /// Calendar day of `timestamp`
    pub date: NaiveDate,
    /// Time of day of `timestamp`
    pub time: NaiveTime,
    pub emotion: Emotion,
    pub note: String,
}

impl MoodEntry {
    /// Create an entry, deriving `date` and `time` from the timestamp.
    /// Sub-second precision is dropped so the entry survives a round trip
    /// through the store unchanged.
    pub fn new(timestamp: NaiveDateTime, emotion: Emotion, note: impl Into<String>) -> Self {
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);

        MoodEntry {
            timestamp,
            date: timestamp.date(),
            time: timestamp.time(),
            emotion,
            note: note.into(),
        }
    }

    /// Check the invariants a persisted entry must satisfy
    pub fn validate(&self) -> Result<()> {
        let chars = self.note.chars().count();
        if chars > MAX_NOTE_CHARS {
            return Err(MoodlogError::Validation(format!(
                "Note is too long: {} characters (max {})",
                chars, MAX_NOTE_CHARS
            )));
        }

        if self.date != self.timestamp.date() || self.time != self.timestamp.time() {
            return Err(MoodlogError::Validation(format!(
                "Entry date/time ({} {}) does not match its timestamp ({})",
                self.date, self.time, self.timestamp
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_new_derives_date_and_time() {
        let entry = MoodEntry::new(at(2024, 6, 13, 21, 5, 9), Emotion::Tired, "long day");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
        assert_eq!(entry.time, NaiveTime::from_hms_opt(21, 5, 9).unwrap());
        assert_eq!(entry.note, "long day");
    }

    #[test]
    fn test_new_truncates_subseconds() {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 13)
            .unwrap()
            .and_hms_milli_opt(8, 0, 1, 750)
            .unwrap();
        let entry = MoodEntry::new(ts, Emotion::Happy, "");
        assert_eq!(entry.timestamp, at(2024, 6, 13, 8, 0, 1));
        assert_eq!(entry.time, NaiveTime::from_hms_opt(8, 0, 1).unwrap());
    }

    #[test]
    fn test_validate_accepts_note_at_limit() {
        let note = "a".repeat(MAX_NOTE_CHARS);
        let entry = MoodEntry::new(at(2024, 6, 13, 8, 0, 0), Emotion::Happy, note);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        let note = "기".repeat(MAX_NOTE_CHARS);
        let entry = MoodEntry::new(at(2024, 6, 13, 8, 0, 0), Emotion::Happy, note);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_note() {
        let note = "a".repeat(MAX_NOTE_CHARS + 1);
        let entry = MoodEntry::new(at(2024, 6, 13, 8, 0, 0), Emotion::Happy, note);
        match entry.validate() {
            Err(MoodlogError::Validation(msg)) => assert!(msg.contains("too long")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_mismatched_date() {
        let mut entry = MoodEntry::new(at(2024, 6, 13, 8, 0, 0), Emotion::Happy, "");
        entry.date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        assert!(entry.validate().is_err());
    }
}
