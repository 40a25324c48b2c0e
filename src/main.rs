use chrono::Local;
use clap::Parser;
use moodlog::application::{
    export_csv, export_summary, history, init::init, ConfigService, ExportTarget,
    RecordMoodService, RecordRequest, WeeklyReportService,
};
use moodlog::cli::{
    format_emotions, format_history, format_recorded, format_week, joined_time_ref, Cli, Commands,
    ExportKind,
};
use moodlog::domain::resolve_reference;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::FileSystemRepository;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by MOODLOG_LOG (default: warn)
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("MOODLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    let now = Local::now().naive_local();

    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Add {
            emotion,
            note,
            date,
            at,
        } => {
            let repo = FileSystemRepository::discover()?;
            let request = RecordRequest {
                emotion,
                note,
                date,
                at,
            };
            let (entry, total) = RecordMoodService::new(repo).execute(&request, now)?;
            print!("{}", format_recorded(&entry, total));
            Ok(())
        }
        Commands::History { limit } => {
            let repo = FileSystemRepository::discover()?;
            let entries = history(&repo, limit)?;
            println!("{}", format_history(&entries).trim_end());
            Ok(())
        }
        Commands::Week { time_ref } => {
            let repo = FileSystemRepository::discover()?;
            let reference = resolve_reference(joined_time_ref(&time_ref).as_deref(), now.date())?;

            let service = WeeklyReportService::new(repo);
            let report = service.report(reference)?;
            let status = service.check_challenge(&report)?;
            print!("{}", format_week(&report, status));
            Ok(())
        }
        Commands::Challenge { reset: _ } => {
            let repo = FileSystemRepository::discover()?;
            WeeklyReportService::new(repo).reset_challenge()?;
            println!("Challenge reset");
            Ok(())
        }
        Commands::Export { kind } => {
            let repo = FileSystemRepository::discover()?;
            match kind {
                ExportKind::Csv { output } => {
                    let target = output
                        .as_deref()
                        .map_or(ExportTarget::Stdout, ExportTarget::File);
                    export_csv(&repo, target)?;
                    if let Some(path) = output {
                        println!("Exported log to {}", path.display());
                    }
                }
                ExportKind::Summary { time_ref, output } => {
                    let reference =
                        resolve_reference(joined_time_ref(&time_ref).as_deref(), now.date())?;
                    let target = output
                        .as_deref()
                        .map_or(ExportTarget::Stdout, ExportTarget::File);
                    export_summary(&repo, reference, target)?;
                    if let Some(path) = output {
                        println!("Exported summary to {}", path.display());
                    }
                }
            }
            Ok(())
        }
        Commands::Emotions => {
            print!("{}", format_emotions());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("name = {}", config.name);
                println!("goal = {}", config.weekly_goal);
                return Ok(());
            }

            match (key, value) {
                (Some(k), Some(v)) => {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                }
                (Some(k), None) => println!("{}", service.get(&k)?),
                (None, _) => {
                    println!("Usage: moodlog config [--list | <key> [<value>]]");
                    println!("Valid keys: name, goal");
                }
            }
            Ok(())
        }
    }
}
