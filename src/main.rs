mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::ScheduleArgs;

/// Environment variable holding the log filter (e.g. "schedgen_core=debug")
const LOG_ENV: &str = "SCHEDGEN_LOG";

#[derive(Parser)]
#[command(name = "schedgen")]
#[command(about = "Turn a weekly AM/PM schedule into an .ics file for Outlook, Google Calendar or Apple Calendar")]
struct Cli {
    /// Log what the generator is doing (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a blank schedule template (weeks 1-5, AM and PM rows) to fill in
    Init {
        /// Where to write the template
        #[arg(default_value = "schedule.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Generate a calendar file from a schedule template
    Generate {
        #[command(flatten)]
        schedule: ScheduleArgs,

        /// Output file (defaults to `output` from config, else schedule.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the calendar to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Write labels verbatim instead of escaping commas, semicolons and newlines
        #[arg(long)]
        legacy_text: bool,
    },
    /// List the events a template produces over a date range
    Preview {
        #[command(flatten)]
        schedule: ScheduleArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { path, force } => commands::init::run(&path, force),
        Commands::Generate {
            schedule,
            output,
            stdout,
            legacy_text,
        } => commands::generate::run(&schedule, output, stdout, legacy_text),
        Commands::Preview { schedule } => commands::preview::run(&schedule),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so `generate --stdout` output stays a clean document
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
