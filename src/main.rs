//! CLI entry point for the bikeshare statistics tool.
//!
//! Without a subcommand (or with `interactive`) it runs the prompt-driven
//! session; `report` computes a single report from command-line selectors.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bikeshare_stats::{
    config::Config,
    filters::{City, DayFilter, MonthFilter},
    loader::load_filtered,
    logging::init_tracing,
    output::{append_record, print_pretty, write_json, write_raw_rows, write_report},
    prompt::Prompter,
    session::run_session,
    stats::{ReportSummary, TripReport},
};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore bikeshare trip data for Chicago, New York City and Washington", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Raw rows shown per page in interactive mode
    #[arg(short, long, global = true)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for city, month and day, then print statistics (default)
    Interactive,
    /// Print statistics for the given selectors without prompting
    Report {
        /// chicago, "new york city" or washington
        #[arg(short, long)]
        city: City,

        /// "all" or january .. june
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// "all" or a weekday name
        #[arg(long, default_value = "all")]
        day: DayFilter,

        /// Print the report as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also print the first N raw rows
        #[arg(long, default_value_t = 0)]
        raw: usize,

        /// CSV file to append a one-line summary to
        #[arg(long)]
        append: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.data_dir, cli.page_size);

    let _log_guard = init_tracing(&config.log_file_path);
    info!(data_dir = %config.data_dir.display(), page_size = config.page_size, "Starting");

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let cycles = run_session(&mut prompter, &config.data_dir, config.page_size)?;
            info!(cycles, "Session finished");
        }
        Commands::Report {
            city,
            month,
            day,
            json,
            raw,
            append,
        } => {
            let ds = load_filtered(&config.data_dir, city, month, day)
                .with_context(|| format!("loading trips for {city}"))?;
            let report = TripReport::from_dataset(&ds, month, day);
            print_pretty(&report);

            let mut out = io::stdout().lock();
            if json {
                write_json(&mut out, &report)?;
            } else {
                write_report(&mut out, &report)?;
            }

            if raw > 0 {
                writeln!(out)?;
                write_raw_rows(&mut out, ds.schema(), ds.page(0, raw), true)?;
            }

            if let Some(path) = append {
                append_record(&path, &ReportSummary::from_report(&report))
                    .with_context(|| format!("appending summary to {path}"))?;
                info!(path = %path, "Summary appended");
            }
        }
    }

    Ok(())
}
