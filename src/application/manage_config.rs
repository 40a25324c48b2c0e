//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "name" => Ok(config.name),
            "goal" => Ok(config.weekly_goal.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "name" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err(MoodlogError::Config("Name cannot be empty".to_string()));
                }
                config.name = name.to_string();
            }
            "goal" => {
                config.weekly_goal = value.trim().parse().map_err(|_| {
                    MoodlogError::Config(format!(
                        "Invalid goal: '{}'. Expected a non-negative whole number",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> MoodlogError {
    MoodlogError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: name, goal",
        key
    ))
}
