//! Build the in-memory dataset from a results directory.
//!
//! Files are processed in lexicographic order so repeated runs over the
//! same directory yield the same record order. A file that fails to parse
//! or normalize is reported and skipped; it never aborts the batch.

use crate::parser::{normalize_record, parse_record_file, ExperimentRecord};
use crate::utils::config::ReportConfig;
use crate::utils::error::{DatasetError, ParseError};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

const BLANK_FILE_REASON: &str = "no key,value lines";

/// A result file that was skipped, and why
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub file_name: String,
    pub reason: String,
}

/// Records built from one results directory.
///
/// Records appear in file-processing order and are read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ExperimentRecord>,
    failures: Vec<FileFailure>,
    files_scanned: usize,
}

impl Dataset {
    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Discover result files in the configured directory
///
/// **Public** - also useful on its own for listing inputs
///
/// # Returns
/// Matching regular files, sorted lexicographically
///
/// # Errors
/// * `DatasetError::DirectoryNotFound` - results directory does not exist
/// * `DatasetError::InvalidPattern` - configured file pattern is not a valid glob
pub fn discover_result_files(config: &ReportConfig) -> Result<Vec<PathBuf>, DatasetError> {
    if !config.results_dir.is_dir() {
        return Err(DatasetError::DirectoryNotFound(config.results_dir.clone()));
    }

    let pattern = config.discovery_pattern();
    debug!("Discovering result files with pattern: {}", pattern);

    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    files.sort();
    Ok(files)
}

/// Build the dataset for a results directory
///
/// **Public** - main entry point for the dataset stage
///
/// Prints one `OK:`, `SKIPPED:` or `ERROR:` line per file. Files without
/// any `key,value` line are skipped.
///
/// # Errors
/// * `DatasetError::DirectoryNotFound` - results directory does not exist
/// * `DatasetError::NoFilesFound` - no file matched the naming pattern
/// * `DatasetError::NoValidRecords` - every discovered file failed
pub fn build_dataset(config: &ReportConfig) -> Result<Dataset, DatasetError> {
    let files = discover_result_files(config)?;

    if files.is_empty() {
        return Err(DatasetError::NoFilesFound(config.results_dir.clone()));
    }

    println!("Found {} file(s) to process\n", files.len());
    info!(
        "Processing {} result file(s) in {}",
        files.len(),
        config.results_dir.display()
    );

    let mut dataset = Dataset {
        files_scanned: files.len(),
        ..Default::default()
    };

    for path in &files {
        let file_name = display_name(path);

        match load_record(path, config) {
            Ok(Some(record)) => {
                println!("  OK: {}", file_name);
                dataset.records.push(record);
            }
            Ok(None) => {
                println!("  SKIPPED: {} - {}", file_name, BLANK_FILE_REASON);
                debug!("Skipping {}: {}", path.display(), BLANK_FILE_REASON);
                dataset.failures.push(FileFailure {
                    file_name,
                    reason: BLANK_FILE_REASON.to_string(),
                });
            }
            Err(e) => {
                println!("  ERROR: {} - {}", file_name, e);
                warn!("Skipping {}: {}", path.display(), e);
                dataset.failures.push(FileFailure {
                    file_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    if dataset.records.is_empty() {
        return Err(DatasetError::NoValidRecords {
            failed: dataset.failures.len(),
        });
    }

    info!(
        "Built dataset: {} record(s), {} skipped",
        dataset.records.len(),
        dataset.failures.len()
    );

    Ok(dataset)
}

/// Parse and normalize one result file
///
/// **Private** - internal helper for build_dataset
///
/// Returns `Ok(None)` for a file without any `key,value` line.
fn load_record(path: &Path, config: &ReportConfig) -> Result<Option<ExperimentRecord>, ParseError> {
    let raw = parse_record_file(path)?;
    if raw.is_blank() {
        return Ok(None);
    }
    normalize_record(&raw, config).map(Some)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
