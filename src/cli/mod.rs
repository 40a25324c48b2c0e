//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{joined_time_ref, Cli, Commands, ExportKind};
pub use output::{
    format_calendar, format_counts, format_emotions, format_history, format_recorded, format_week,
};
