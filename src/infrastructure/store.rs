//! CSV-backed record store
//!
//! The whole log lives in one CSV file with the header
//! `timestamp,date,time,emotion,note`. Every append rewrites the file through a
//! temporary sibling and a rename, so readers only ever see complete logs.

use crate::domain::{Emotion, MoodEntry};
use crate::error::{MoodlogError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column names, in file order
pub const HEADER: [&str; 5] = ["timestamp", "date", "time", "emotion", "note"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Append-only log of mood entries
pub trait RecordStore {
    /// All entries in storage order. A store that does not exist yet is empty.
    fn load(&self) -> Result<Vec<MoodEntry>>;

    /// Persist `entry` at the end of the log and return the updated log
    fn append(&self, entry: MoodEntry) -> Result<Vec<MoodEntry>>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    timestamp: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    emotion: String,
    #[serde(default)]
    note: String,
}

impl From<&MoodEntry> for Row {
    fn from(entry: &MoodEntry) -> Self {
        Row {
            timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            date: entry.date.format("%Y-%m-%d").to_string(),
            time: entry.time.format("%H:%M:%S").to_string(),
            emotion: entry.emotion.key().to_string(),
            note: entry.note.clone(),
        }
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").ok())
}

impl Row {
    fn into_entry(self) -> std::result::Result<MoodEntry, String> {
        let timestamp = parse_timestamp(&self.timestamp)
            .ok_or_else(|| format!("invalid timestamp '{}'", self.timestamp))?;
        let emotion = Emotion::from_key(&self.emotion)
            .ok_or_else(|| format!("unknown emotion key '{}'", self.emotion))?;

        let entry = MoodEntry::new(timestamp, emotion, self.note);

        if !self.date.is_empty() {
            let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
                .map_err(|_| format!("invalid date '{}'", self.date))?;
            if date != entry.date {
                return Err(format!(
                    "date '{}' does not match timestamp '{}'",
                    self.date, self.timestamp
                ));
            }
        }
        if !self.time.is_empty() {
            let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M:%S")
                .map_err(|_| format!("invalid time '{}'", self.time))?;
            if time != entry.time {
                return Err(format!(
                    "time '{}' does not match timestamp '{}'",
                    self.time, self.timestamp
                ));
            }
        }

        Ok(entry)
    }
}

/// Record store kept in a single CSV file
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: PathBuf) -> Self {
        CsvRecordStore { path }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate an untrusted emotion key before building and appending the entry
    pub fn append_raw(
        &self,
        timestamp: NaiveDateTime,
        emotion: &str,
        note: &str,
    ) -> Result<Vec<MoodEntry>> {
        let emotion: Emotion = emotion.parse()?;
        self.append(MoodEntry::new(timestamp, emotion, note))
    }

    /// The full log in the persisted schema
    pub fn export_csv(&self) -> Result<String> {
        let entries = self.load()?;
        let bytes = self.encode(&entries)?;
        String::from_utf8(bytes).map_err(|e| self.error(e.to_string()))
    }

    fn error(&self, reason: impl Into<String>) -> MoodlogError {
        MoodlogError::storage(&self.path, reason)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<MoodEntry>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| self.error(format!("unreadable header: {}", e)))?;
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(self.error(format!(
                "unexpected header '{}', expected '{}'",
                headers.iter().collect::<Vec<_>>().join(","),
                HEADER.join(",")
            )));
        }

        let mut entries = Vec::new();
        for (idx, row) in reader.deserialize::<Row>().enumerate() {
            let record = idx + 1;
            let row = row.map_err(|e| self.error(format!("record {}: {}", record, e)))?;
            let entry = row
                .into_entry()
                .map_err(|reason| self.error(format!("record {}: {}", record, reason)))?;
            entries.push(entry);
        }

        Ok(entries)
    }

    fn encode(&self, entries: &[MoodEntry]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(HEADER)
            .map_err(|e| self.error(e.to_string()))?;
        for entry in entries {
            writer
                .serialize(Row::from(entry))
                .map_err(|e| self.error(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| self.error(e.to_string()))
    }

    /// Replace the backing file with `bytes` via a temporary sibling file
    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.error(e.to_string()))?;
            }
        }

        let tmp_name = format!(
            "{}.moodlog-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("emotions.csv"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        let written = fs::File::create(&tmp_path).and_then(|mut file| {
            file.write_all(bytes)?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.error(format!("write failed: {}", e)));
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.error(format!("replace failed: {}", e))
        })
    }
}

impl RecordStore for CsvRecordStore {
    fn load(&self) -> Result<Vec<MoodEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no mood log yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.error(e.to_string())),
        };

        if bytes.is_empty() {
            tracing::warn!(path = %self.path.display(), "mood log is empty, treating as no entries");
            return Ok(Vec::new());
        }

        let entries = self.decode(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "loaded mood log");
        Ok(entries)
    }

    fn append(&self, entry: MoodEntry) -> Result<Vec<MoodEntry>> {
        let entry = MoodEntry::new(entry.timestamp, entry.emotion, entry.note);
        entry.validate()?;

        let mut entries = self.load()?;
        entries.push(entry);

        let bytes = self.encode(&entries)?;
        self.write_atomic(&bytes)?;

        tracing::info!(
            path = %self.path.display(),
            count = entries.len(),
            "appended mood entry"
        );
        Ok(entries)
    }
}
