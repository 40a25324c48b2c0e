//! File system repository

use crate::domain::ChallengeSession;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::{session, Config, CsvRecordStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the mood log inside the journal root
pub const STORE_FILE: &str = "emotions.csv";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load challenge state from .moodlog/session.toml
    fn load_session(&self) -> Result<ChallengeSession>;

    /// Save challenge state to .moodlog/session.toml
    fn save_session(&self, session: &ChallengeSession) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the journal root: MOODLOG_ROOT if set, otherwise the nearest
    /// ancestor of the current directory holding a .moodlog directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(MoodlogError::Config(format!(
                "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the first directory containing .moodlog
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_moodlog_dir(dir))
            .map(|dir| {
                tracing::debug!(root = %dir.display(), "discovered journal");
                FileSystemRepository::new(dir.to_path_buf())
            })
            .ok_or_else(|| MoodlogError::NotMoodlogDirectory(start.to_path_buf()))
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }

    /// Record store backed by emotions.csv in the journal root
    pub fn store(&self) -> CsvRecordStore {
        CsvRecordStore::new(self.root.join(STORE_FILE))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn load_session(&self) -> Result<ChallengeSession> {
        session::load_session(&self.root)
    }

    fn save_session(&self, session: &ChallengeSession) -> Result<()> {
        session::save_session(&self.root, session)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&moodlog_dir)?;
        tracing::info!(root = %self.root.display(), "initialized journal");
        Ok(())
    }
}
