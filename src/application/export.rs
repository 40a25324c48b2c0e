//! Export use cases: full log as CSV and weekly summary as text

use crate::application::WeeklyReportService;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Where an export goes
#[derive(Debug, Clone, Copy)]
pub enum ExportTarget<'a> {
    Stdout,
    File(&'a Path),
}

fn deliver(content: &str, target: ExportTarget<'_>) -> Result<()> {
    match target {
        ExportTarget::Stdout => print!("{}", content),
        ExportTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            tracing::info!(path = %path.display(), bytes = content.len(), "wrote export");
        }
    }
    Ok(())
}

/// Write the whole log in the persisted CSV schema
pub fn export_csv(repository: &FileSystemRepository, target: ExportTarget<'_>) -> Result<()> {
    let content = repository.store().export_csv()?;
    deliver(&content, target)
}

/// Write the summary of the week containing `reference`
pub fn export_summary(
    repository: &FileSystemRepository,
    reference: NaiveDate,
    target: ExportTarget<'_>,
) -> Result<()> {
    let report = WeeklyReportService::new(repository.clone()).report(reference)?;
    deliver(&report.summary(), target)
}
