//! Configuration management

use crate::error::{MoodlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of positive entries per week
pub const DEFAULT_WEEKLY_GOAL: u32 = 3;

/// Journal settings stored in .moodlog/config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Display name used in weekly summaries
    #[serde(default = "default_name")]
    pub name: String,

    /// Positive entries needed to complete the weekly challenge
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
}

fn default_name() -> String {
    "Student".to_string()
}

fn default_weekly_goal() -> u32 {
    DEFAULT_WEEKLY_GOAL
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: default_name(),
            weekly_goal: default_weekly_goal(),
        }
    }
}

impl Config {
    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodlog_dir = path.join(".moodlog");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(moodlog_dir.join("config.toml"), contents)?;
        tracing::debug!(root = %path.display(), "saved config");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.name, "Student");
        assert_eq!(config.weekly_goal, 3);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            name: "Mina".to_string(),
            weekly_goal: 5,
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".moodlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        fs::write(temp.path().join(".moodlog/config.toml"), "name = \"Jo\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.name, "Jo");
        assert_eq!(loaded.weekly_goal, DEFAULT_WEEKLY_GOAL);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(MoodlogError::NotMoodlogDirectory(_)) => {}
            other => panic!("Expected NotMoodlogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        fs::write(temp.path().join(".moodlog/config.toml"), "weekly_goal = -1\n").unwrap();

        match Config::load_from_dir(temp.path()) {
            Err(MoodlogError::Config(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
