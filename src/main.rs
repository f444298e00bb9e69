//! Netsim Report CLI
//!
//! Consolidates network simulation result files into a CSV table,
//! grouped statistics and a comparison chart.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use netsim_report::commands::{
    display_schema, display_version, execute_process, validate_args, validate_table_file,
    ProcessArgs, ProcessOutcome,
};
use netsim_report::utils::config::DEFAULT_RESULTS_DIR;
use std::path::PathBuf;

/// Netsim Report - consolidate network simulation results
#[derive(Parser, Debug)]
#[command(name = "netsim-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Consolidate result files, compute statistics and render charts
    Process {
        /// Directory containing resultados_*.txt files
        #[arg(short, long, default_value = DEFAULT_RESULTS_DIR, env = "NETSIM_RESULTS_DIR")]
        dir: PathBuf,

        /// Skip chart rendering
        #[arg(long)]
        no_chart: bool,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Chart width in pixels
        #[arg(long, default_value = "1600")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "1200")]
        height: usize,

        /// Chart theme (light, dark)
        #[arg(long, default_value = "light")]
        theme: String,

        /// Output path for a JSON run report (optional)
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Validate a consolidated CSV table
    Validate {
        /// Path to consolidated table
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display table schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Failures are reported here; the exit status does not distinguish them
    if let Err(e) = run(cli.command) {
        println!("\nERROR: {}", e);
        println!("{:?}", e);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Process {
            dir,
            no_chart,
            title,
            width,
            height,
            theme,
            json,
        } => {
            let args = ProcessArgs {
                results_dir: dir,
                render_chart: !no_chart,
                chart_title: title,
                chart_width: width,
                chart_height: height,
                theme,
                json_report: json,
            };

            // Validate args first
            validate_args(&args)?;

            print_banner("RESULT PROCESSING");

            match execute_process(&args)? {
                ProcessOutcome::Completed { records, skipped } => {
                    print_banner("PROCESSING COMPLETED SUCCESSFULLY");
                    println!("  {} record(s), {} file(s) skipped", records, skipped);
                }
                ProcessOutcome::NoData { .. } => {
                    println!("\nERROR: No data processed.");
                }
            }
        }

        Commands::Validate { file } => {
            validate_table_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

fn print_banner(text: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", text);
    println!("{}", "=".repeat(60));
}
