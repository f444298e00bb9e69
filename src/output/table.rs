//! CSV table writers and reader.
//!
//! Both tables are rewritten from scratch on every run. Column headers come
//! from the serde names of the row types, so the header and the row layout
//! cannot drift apart.

use crate::aggregator::GroupStatistics;
use crate::parser::ExperimentRecord;
use crate::utils::config::CONSOLIDATED_COLUMNS;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Write the consolidated table, one row per record in the given order
///
/// **Public** - main entry point for the consolidator
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::Csv` - I/O or encoding error while writing
pub fn write_consolidated(
    records: &[ExperimentRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing consolidated table to: {}", output_path.display());
    super::prepare_output_path(output_path)?;

    let mut writer = csv::Writer::from_path(output_path)?;
    // Headers are emitted with the first serialized row
    if records.is_empty() {
        writer.write_record(CONSOLIDATED_COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        "Consolidated table written ({} rows, {} bytes)",
        records.len(),
        super::calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a consolidated table back into records
///
/// **Public** - used by the validate command and round-trip checks
///
/// # Errors
/// * `OutputError::Csv` - file missing, header mismatch, or malformed row
pub fn read_consolidated(input_path: impl AsRef<Path>) -> Result<Vec<ExperimentRecord>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading consolidated table from: {}", input_path.display());

    let mut reader = csv::Reader::from_path(input_path)?;
    let records = reader
        .deserialize()
        .collect::<Result<Vec<ExperimentRecord>, csv::Error>>()?;

    debug!("Loaded {} record(s)", records.len());
    Ok(records)
}

/// One row of the statistics table
///
/// An undefined standard deviation is written as an empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsRow {
    #[serde(rename = "Protocolo")]
    pub protocol: String,
    #[serde(rename = "Mobilidade")]
    pub mobility: String,

    #[serde(rename = "Vazao_mean")]
    pub throughput_mean: f64,
    #[serde(rename = "Vazao_std")]
    pub throughput_std: Option<f64>,
    #[serde(rename = "Vazao_min")]
    pub throughput_min: f64,
    #[serde(rename = "Vazao_max")]
    pub throughput_max: f64,

    #[serde(rename = "AtrasoMedio_mean")]
    pub delay_mean: f64,
    #[serde(rename = "AtrasoMedio_std")]
    pub delay_std: Option<f64>,
    #[serde(rename = "AtrasoMedio_min")]
    pub delay_min: f64,
    #[serde(rename = "AtrasoMedio_max")]
    pub delay_max: f64,

    #[serde(rename = "TaxaPerda_mean")]
    pub loss_mean: f64,
    #[serde(rename = "TaxaPerda_std")]
    pub loss_std: Option<f64>,
    #[serde(rename = "TaxaPerda_min")]
    pub loss_min: f64,
    #[serde(rename = "TaxaPerda_max")]
    pub loss_max: f64,
}

impl From<&GroupStatistics> for StatisticsRow {
    fn from(group: &GroupStatistics) -> Self {
        Self {
            protocol: group.key.protocol.clone(),
            mobility: group.key.mobility.clone(),
            throughput_mean: group.throughput.mean,
            throughput_std: group.throughput.std,
            throughput_min: group.throughput.min,
            throughput_max: group.throughput.max,
            delay_mean: group.delay.mean,
            delay_std: group.delay.std,
            delay_min: group.delay.min,
            delay_max: group.delay.max,
            loss_mean: group.loss.mean,
            loss_std: group.loss.std,
            loss_min: group.loss.min,
            loss_max: group.loss.max,
        }
    }
}

/// Write the grouped statistics table
///
/// **Public** - persists the output of `calculate_group_statistics`
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::Csv` - I/O or encoding error while writing
pub fn write_statistics(
    groups: &[GroupStatistics],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing statistics table to: {}", output_path.display());
    super::prepare_output_path(output_path)?;

    let mut writer = csv::Writer::from_path(output_path)?;
    for group in groups {
        writer.serialize(StatisticsRow::from(group))?;
    }
    writer.flush()?;

    info!("Statistics table written ({} groups)", groups.len());
    Ok(())
}
