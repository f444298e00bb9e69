//! Process command implementation.
//!
//! The process command:
//! 1. Builds the dataset from the results directory
//! 2. Writes the consolidated table
//! 3. Prints the summary and writes the statistics table
//! 4. Renders the comparison chart
//! 5. Writes the optional JSON run report

use crate::aggregator::{calculate_group_statistics, generate_text_summary};
use crate::chart::{generate_comparison_chart, ChartConfig, ChartTheme};
use crate::commands::models::{ProcessArgs, ProcessOutcome};
use crate::dataset::{build_dataset, Dataset};
use crate::output::json::{ReportFailure, ReportGroup};
use crate::output::{write_consolidated, write_report, write_statistics, write_svg, RunReport};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::DatasetError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the process command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// `ProcessOutcome::Completed` when outputs were written, or
/// `ProcessOutcome::NoData` when the directory is missing, holds no result
/// files, or every file failed. The latter is reported, not an error.
///
/// # Errors
/// * Output write failures (tables, chart, report)
/// * Chart rendering failures (e.g. unknown theme)
pub fn execute_process(args: &ProcessArgs) -> Result<ProcessOutcome> {
    let start_time = Instant::now();
    let config = args.report_config();

    println!("\nProcessing files in: {}/", config.results_dir.display());
    println!("{}", "-".repeat(60));

    // Step 1: Build dataset
    info!("Step 1/4: Reading result files...");
    let dataset = match build_dataset(&config) {
        Ok(dataset) => dataset,
        Err(e @ DatasetError::InvalidPattern(_)) => {
            return Err(e).context("Failed to discover result files");
        }
        Err(e) => {
            println!("\nERROR: {}", e);
            return Ok(ProcessOutcome::NoData {
                reason: e.to_string(),
            });
        }
    };

    println!("\nTotal processed: {} experiment(s)", dataset.len());
    debug!("Skipped files: {:?}", dataset.failures());

    // Step 2: Consolidated table
    info!("Step 2/4: Writing consolidated table...");
    let consolidated_path = config.consolidated_path();
    write_consolidated(dataset.records(), &consolidated_path)
        .context("Failed to write consolidated table")?;
    println!("CSV saved: {}", consolidated_path.display());

    // Step 3: Summary and statistics table
    info!("Step 3/4: Calculating statistics...");
    let groups = calculate_group_statistics(dataset.records());

    println!("\n{}", generate_text_summary(dataset.records()));

    let statistics_path = config.statistics_path();
    write_statistics(&groups, &statistics_path).context("Failed to write statistics table")?;
    println!("\nStatistics saved: {}", statistics_path.display());

    // Step 4: Chart
    if args.render_chart {
        info!("Step 4/4: Rendering comparison chart...");
        let chart_config = chart_config(args)?;
        let svg = generate_comparison_chart(dataset.records(), Some(&chart_config))
            .context("Failed to render comparison chart")?;

        let chart_path = config.chart_path();
        write_svg(&svg, &chart_path).context("Failed to write comparison chart")?;
        println!("Chart saved: {}", chart_path.display());
    } else {
        info!("Step 4/4: Skipping chart rendering (not requested)");
    }

    if let Some(report_path) = &args.json_report {
        let report = build_report(&dataset, &groups, &config.results_dir.display().to_string());
        write_report(&report, report_path).context("Failed to write JSON report")?;
        println!("Report saved: {}", report_path.display());
    }

    let elapsed = start_time.elapsed();
    info!("Processing completed in {:.2}s", elapsed.as_secs_f64());

    Ok(ProcessOutcome::Completed {
        records: dataset.len(),
        skipped: dataset.failures().len(),
    })
}

/// Resolve chart settings from the command arguments
///
/// **Private** - an unknown theme name is an error here
fn chart_config(args: &ProcessArgs) -> Result<ChartConfig> {
    let theme: ChartTheme = args.theme.parse()?;

    let mut config = ChartConfig::new()
        .with_size(args.chart_width, args.chart_height)
        .with_theme(theme);

    if let Some(title) = &args.chart_title {
        config = config.with_title(title.clone());
    }

    Ok(config)
}

/// Assemble the JSON run report
fn build_report(
    dataset: &Dataset,
    groups: &[crate::aggregator::GroupStatistics],
    source_dir: &str,
) -> RunReport {
    use chrono::Utc;

    RunReport {
        version: SCHEMA_VERSION.to_string(),
        source_dir: source_dir.to_string(),
        files_scanned: dataset.files_scanned(),
        record_count: dataset.len(),
        failures: dataset.failures().iter().map(ReportFailure::from).collect(),
        groups: groups.iter().map(ReportGroup::from).collect(),
        generated_at: Utc::now().to_rfc3339(),
    }
}

/// Validate process arguments
///
/// **Public** - can be called before execute_process for early validation
pub fn validate_args(args: &ProcessArgs) -> Result<()> {
    if args.results_dir.as_os_str().is_empty() {
        anyhow::bail!("Results directory cannot be empty");
    }

    if args.render_chart {
        if args.chart_width < 400 || args.chart_height < 300 {
            anyhow::bail!("Chart must be at least 400x300 pixels");
        }

        if args.chart_width > 10_000 || args.chart_height > 10_000 {
            anyhow::bail!("Chart is too large (max 10000 pixels per side)");
        }
    }

    if let Some(path) = &args.json_report {
        if path.as_os_str().is_empty() {
            anyhow::bail!("JSON report path cannot be empty");
        }
    }

    Ok(())
}
