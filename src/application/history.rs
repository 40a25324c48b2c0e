//! List entries use case

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, RecordStore};

/// Entries newest first, optionally limited. Entries sharing a timestamp keep
/// the later-stored one first.
pub fn history(repository: &FileSystemRepository, limit: Option<usize>) -> Result<Vec<MoodEntry>> {
    let mut entries = repository.store().load()?;

    entries.reverse();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
