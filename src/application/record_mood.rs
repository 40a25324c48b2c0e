//! Record mood use case

use crate::domain::{resolve_reference, Emotion, MoodEntry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{FileSystemRepository, RecordStore};
use chrono::NaiveDateTime;

/// What the user asked to record
#[derive(Debug, Clone, Default)]
pub struct RecordRequest {
    /// Emotion key as typed by the user
    pub emotion: String,
    pub note: String,
    /// Day to record for, as a time reference; the current time of day is kept
    pub date: Option<String>,
    /// Exact timestamp, overrides `date`
    pub at: Option<NaiveDateTime>,
}

/// Service for appending entries to the mood log
pub struct RecordMoodService {
    repository: FileSystemRepository,
}

impl RecordMoodService {
    pub fn new(repository: FileSystemRepository) -> Self {
        RecordMoodService { repository }
    }

    /// Validate and persist the entry, returning it along with the new log size
    pub fn execute(&self, request: &RecordRequest, now: NaiveDateTime) -> Result<(MoodEntry, usize)> {
        let emotion: Emotion = request.emotion.parse()?;

        let timestamp = match request.at {
            Some(at) => at,
            None => {
                let day = resolve_reference(request.date.as_deref(), now.date())?;
                day.and_time(now.time())
            }
        };

        let store = self.repository.store();
        let entries = store.append(MoodEntry::new(timestamp, emotion, request.note.as_str()))?;

        let entry = entries
            .last()
            .cloned()
            .ok_or_else(|| MoodlogError::storage(store.path(), "entry missing after append"))?;
        Ok((entry, entries.len()))
    }
}
