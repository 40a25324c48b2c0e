//! Persistence for caller-owned challenge state

use crate::domain::ChallengeSession;
use crate::error::{MoodlogError, Result};
use std::fs;
use std::path::Path;

fn session_path(root: &Path) -> std::path::PathBuf {
    root.join(".moodlog").join("session.toml")
}

/// Load .moodlog/session.toml, falling back to a fresh session
pub fn load_session(root: &Path) -> Result<ChallengeSession> {
    match fs::read_to_string(session_path(root)) {
        Ok(contents) => toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse session.toml: {}", e))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ChallengeSession::default()),
        Err(e) => Err(MoodlogError::Io(e)),
    }
}

/// Write .moodlog/session.toml
pub fn save_session(root: &Path, session: &ChallengeSession) -> Result<()> {
    let contents = toml::to_string(session)?;
    fs::write(session_path(root), contents)?;
    tracing::debug!(announced = session.announced_weeks.len(), "saved challenge session");
    Ok(())
}
