//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage unavailable ({}): {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Build a storage error for the given backing file
    pub fn storage(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MoodlogError::StorageUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidTimeReference(_) => 3,
            MoodlogError::Validation(_) => 4,
            MoodlogError::StorageUnavailable { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-06-13)\n\n\
                    Examples:\n\
                    moodlog week last monday\n\
                    moodlog add happy --date 2024-06-13",
                    ref_str
                )
            }
            MoodlogError::Validation(msg) => {
                if msg.contains("Unknown emotion") {
                    format!(
                        "{}\n\n\
                        Valid emotions: very_happy, happy, neutral, tired, sad, angry, anxious, stressed\n\
                        Run 'moodlog emotions' to see their labels",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            MoodlogError::StorageUnavailable { path, reason } => {
                format!(
                    "Cannot use mood log {}: {}\n\n\
                    Suggestions:\n\
                    • Check the file permissions and free disk space\n\
                    • If the file was edited by hand, fix the reported row\n\
                    • Keep the header: timestamp,date,time,emotion,note",
                    path.display(),
                    reason
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: moodlog config goal 5",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
