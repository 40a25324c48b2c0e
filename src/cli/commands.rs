//! CLI command definitions

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Personal emotion journal with weekly statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record how you feel
    Add {
        /// Emotion key (very_happy, happy, neutral, tired, sad, angry, anxious, stressed)
        emotion: String,

        /// Optional note (up to 300 characters)
        #[arg(short, long, default_value = "")]
        note: String,

        /// Day to record for (e.g., today, yesterday, last monday, 2024-06-13)
        #[arg(short, long, value_name = "TIME_REF")]
        date: Option<String>,

        /// Exact timestamp (YYYY-MM-DDTHH:MM:SS), overrides --date
        #[arg(long, value_name = "TIMESTAMP", conflicts_with = "date")]
        at: Option<NaiveDateTime>,
    },

    /// Show recorded entries, newest first
    History {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show weekly statistics, calendar and challenge progress
    Week {
        /// Any day of the week to show (default: today)
        #[arg(value_name = "TIME_REF")]
        time_ref: Vec<String>,
    },

    /// Manage the weekly challenge
    Challenge {
        /// Forget which weeks' achievements were already announced
        #[arg(long, required = true)]
        reset: bool,
    },

    /// Export the log or a weekly summary
    Export {
        #[command(subcommand)]
        kind: ExportKind,
    },

    /// List the emotions you can record
    Emotions,

    /// View or modify configuration
    Config {
        /// Config key to get or set (name, goal)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExportKind {
    /// Full log in CSV form
    Csv {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Plain-text summary of one week
    Summary {
        /// Any day of the week to summarize (default: today)
        #[arg(value_name = "TIME_REF")]
        time_ref: Vec<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Join a multi-word time reference such as `last monday`
pub fn joined_time_ref(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
