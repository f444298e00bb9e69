//! Reader for simulator result files.
//!
//! A result file is a sequence of `key,value` lines. Lines without a comma
//! are ignored and only the first comma splits, so values may contain commas.

use super::schema::RawRecord;
use crate::utils::config::{
    KEY_AVG_DELAY, KEY_CLIENTS, KEY_LOSS_RATE, KEY_MOBILITY, KEY_PACKETS_LOST,
    KEY_PACKETS_RECEIVED, KEY_PACKETS_SENT, KEY_PROTOCOL, KEY_THROUGHPUT,
};
use crate::utils::error::ParseError;
use log::debug;
use std::path::Path;

/// Parse one result file from disk
///
/// **Public** - main entry point for the dataset builder
///
/// Bytes that are not valid UTF-8 are replaced, never rejected.
///
/// # Errors
/// * `ParseError::Io` - the file could not be opened or read
pub fn parse_record_file(path: impl AsRef<Path>) -> Result<RawRecord, ParseError> {
    let path = path.as_ref();
    debug!("Reading result file: {}", path.display());

    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);

    let raw = parse_record_str(&content);
    debug!(
        "{}: {} recognized key(s), {} unrecognized",
        path.display(),
        raw.recognized_keys(),
        raw.unrecognized_keys
    );

    Ok(raw)
}

/// Parse the text of a result file
///
/// **Public** - useful for tests and in-memory input
///
/// The last occurrence of a duplicate key wins.
pub fn parse_record_str(content: &str) -> RawRecord {
    let mut raw = RawRecord::default();

    for line in content.lines() {
        let Some((key, value)) = line.trim().split_once(',') else {
            continue;
        };
        assign_field(&mut raw, key, value);
    }

    raw
}

/// Store a value in the slot named by `key`
///
/// **Private** - internal helper for parse_record_str
fn assign_field(raw: &mut RawRecord, key: &str, value: &str) {
    let slot = match key {
        KEY_CLIENTS => &mut raw.clients,
        KEY_PROTOCOL => &mut raw.protocol,
        KEY_MOBILITY => &mut raw.mobility,
        KEY_LOSS_RATE => &mut raw.loss_rate,
        KEY_AVG_DELAY => &mut raw.avg_delay,
        KEY_THROUGHPUT => &mut raw.throughput,
        KEY_PACKETS_SENT => &mut raw.packets_sent,
        KEY_PACKETS_RECEIVED => &mut raw.packets_received,
        KEY_PACKETS_LOST => &mut raw.packets_lost,
        _ => {
            raw.unrecognized_keys += 1;
            return;
        }
    };
    *slot = Some(value.to_string());
}
