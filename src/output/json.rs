//! JSON run report writer.
//!
//! The report is the machine-readable counterpart of the console output:
//! how many files were read, which were skipped, and the grouped statistics.

use crate::aggregator::GroupStatistics;
use crate::dataset::FileFailure;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Results directory that was processed
    pub source_dir: String,

    pub files_scanned: usize,
    pub record_count: usize,
    pub failures: Vec<ReportFailure>,
    pub groups: Vec<ReportGroup>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFailure {
    pub file_name: String,
    pub reason: String,
}

impl From<&FileFailure> for ReportFailure {
    fn from(failure: &FileFailure) -> Self {
        Self {
            file_name: failure.file_name.clone(),
            reason: failure.reason.clone(),
        }
    }
}

/// Statistics of one group; `std` is null when undefined
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportGroup {
    pub protocol: String,
    pub mobility: String,
    pub count: usize,
    pub throughput: ReportStats,
    pub delay: ReportStats,
    pub loss: ReportStats,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportStats {
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl From<&GroupStatistics> for ReportGroup {
    fn from(group: &GroupStatistics) -> Self {
        let stats = |s: &crate::aggregator::DescriptiveStats| ReportStats {
            mean: s.mean,
            std: s.std,
            min: s.min,
            max: s.max,
        };

        Self {
            protocol: group.key.protocol.clone(),
            mobility: group.key.mobility.clone(),
            count: group.count,
            throughput: stats(&group.throughput),
            delay: stats(&group.delay),
            loss: stats(&group.loss),
        }
    }
}

/// Write a run report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &RunReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing run report to: {}", output_path.display());
    super::prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Run report written successfully ({} bytes)",
        super::calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a run report from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<RunReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading run report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: RunReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} record(s)",
        report.version, report.record_count
    );

    Ok(report)
}
