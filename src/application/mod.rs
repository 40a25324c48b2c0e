//! Application layer - Use cases and orchestration

pub mod export;
pub mod history;
pub mod init;
pub mod manage_config;
pub mod record_mood;
pub mod weekly_report;

pub use export::{export_csv, export_summary, ExportTarget};
pub use history::history;
pub use manage_config::ConfigService;
pub use record_mood::{RecordMoodService, RecordRequest};
pub use weekly_report::{WeeklyReport, WeeklyReportService};
