use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use poolscan::config::Config;
use poolscan::report::writer::{create_writer, ReportFormat};
use poolscan::{pipeline, report, stats};

/// Poolscan: shared-freelancer pool analysis.
///
/// Reads a company roster and per-period mission records, then reports
/// pairs of companies whose freelancer pools overlap by at least a
/// configurable threshold: which competitors hire the same people you do.
#[derive(Parser)]
#[command(name = "poolscan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the shared-freelancer pair report
    Report {
        /// Path to the company roster CSV
        #[arg(long)]
        companies: Option<String>,

        /// Directory containing the mission CSV files
        #[arg(long)]
        missions_dir: Option<String>,

        /// Minimum shared freelancers for a pair to be reported (default: 10)
        #[arg(long)]
        min_shared: Option<u32>,

        /// Where to write the report
        #[arg(long)]
        output: Option<String>,

        /// Report format: csv or json
        #[arg(long, default_value = "csv")]
        format: String,

        /// Skip the terminal table (the report file is still written)
        #[arg(long)]
        quiet: bool,
    },

    /// Show a summary of the loaded dataset
    Stats {
        /// Path to the company roster CSV
        #[arg(long)]
        companies: Option<String>,

        /// Directory containing the mission CSV files
        #[arg(long)]
        missions_dir: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("poolscan=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            companies,
            missions_dir,
            min_shared,
            output,
            format,
            quiet,
        } => {
            let mut config = Config::load()?;
            if let Some(path) = companies {
                config.companies_path = path;
            }
            if let Some(dir) = missions_dir {
                config.missions_dir = dir;
            }
            if let Some(threshold) = min_shared {
                config.min_shared = threshold as usize;
            }
            if let Some(path) = output {
                config.output_path = Some(path);
            }
            let format = ReportFormat::parse(&format)?;
            config.require_inputs()?;

            let summary = pipeline::run(
                Path::new(&config.companies_path),
                Path::new(&config.missions_dir),
                config.min_shared,
            )?;

            if !quiet {
                report::terminal::display_pair_list(&summary.rows);
            }

            let output_path = config.output_path_for(format);
            let writer = create_writer(format, Path::new(&output_path));
            writer.write(&summary.rows)?;

            println!("\n{}", "Report complete.".bold());
            println!("  Unique valid pairs: {}", summary.rows.len());
            println!(
                "  Companies compared: {} (of {} in the roster)",
                summary.companies_with_missions, summary.companies_loaded
            );
            println!("  Written to: {}", writer.destination());
            println!("  Running time: {}", format_elapsed(summary.elapsed));
        }

        Commands::Stats {
            companies,
            missions_dir,
        } => {
            let mut config = Config::load()?;
            if let Some(path) = companies {
                config.companies_path = path;
            }
            if let Some(dir) = missions_dir {
                config.missions_dir = dir;
            }
            config.require_inputs()?;

            stats::show(
                Path::new(&config.companies_path),
                Path::new(&config.missions_dir),
            )?;
        }
    }

    Ok(())
}

/// Render a wall-clock duration as seconds with millisecond precision.
fn format_elapsed(elapsed: chrono::Duration) -> String {
    format!("{:.3}s", elapsed.num_milliseconds() as f64 / 1000.0)
}
