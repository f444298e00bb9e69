//! Conversion of raw result values into typed experiment records.
//!
//! Integer and float fields follow different failure policies:
//! a malformed integer rejects the whole file, while a malformed float
//! silently becomes `0.0` (see [`lenient_float`]).

use super::schema::{ExperimentRecord, RawRecord};
use crate::utils::config::{
    ReportConfig, AVG_DELAY_UNIT, KEY_CLIENTS, KEY_PACKETS_LOST, KEY_PACKETS_RECEIVED,
    KEY_PACKETS_SENT, LOSS_RATE_UNIT, THROUGHPUT_UNIT,
};
use crate::utils::error::ParseError;

/// Build an `ExperimentRecord` from raw values
///
/// **Public** - called once per result file by the dataset builder
///
/// Missing keys take their defaults: `0` for numbers, and the configured
/// fallback protocol and mobility for the categorical fields.
///
/// # Errors
/// * `ParseError::InvalidInteger` - an integer field holds a non-integer value
pub fn normalize_record(
    raw: &RawRecord,
    config: &ReportConfig,
) -> Result<ExperimentRecord, ParseError> {
    Ok(ExperimentRecord {
        client_count: strict_integer(KEY_CLIENTS, raw.clients.as_deref())?,
        protocol: raw
            .protocol
            .clone()
            .unwrap_or_else(|| config.default_protocol.clone()),
        mobility: raw
            .mobility
            .clone()
            .unwrap_or_else(|| config.default_mobility.clone()),
        loss_rate: lenient_float(raw.loss_rate.as_deref(), LOSS_RATE_UNIT),
        avg_delay_ms: lenient_float(raw.avg_delay.as_deref(), AVG_DELAY_UNIT),
        throughput_mbps: lenient_float(raw.throughput.as_deref(), THROUGHPUT_UNIT),
        packets_sent: strict_integer(KEY_PACKETS_SENT, raw.packets_sent.as_deref())?,
        packets_received: strict_integer(KEY_PACKETS_RECEIVED, raw.packets_received.as_deref())?,
        packets_lost: strict_integer(KEY_PACKETS_LOST, raw.packets_lost.as_deref())?,
    })
}

/// Convert a raw value to `f64`, falling back to `0.0` on any failure
///
/// **Public** - the float coercion policy, tested directly
///
/// Every occurrence of `unit` is removed before parsing. A missing value,
/// an empty string or anything non-numeric yields `0.0`. Never fails.
pub fn lenient_float(value: Option<&str>, unit: &str) -> f64 {
    let Some(value) = value else {
        return 0.0;
    };

    let cleaned = if unit.is_empty() {
        value.trim().to_string()
    } else {
        value.replace(unit, "").trim().to_string()
    };

    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Convert a raw value to `u64`; a missing value is `0`
///
/// **Private** - integer policy for normalize_record
fn strict_integer(field: &'static str, value: Option<&str>) -> Result<u64, ParseError> {
    let Some(value) = value else {
        return Ok(0);
    };

    value
        .trim()
        .parse::<u64>()
        .map_err(|source| ParseError::InvalidInteger {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::record_file::parse_record_str;

    #[test]
    fn test_lenient_float_strips_unit() {
        assert_eq!(lenient_float(Some("12.5 ms"), "ms"), 12.5);
        assert_eq!(lenient_float(Some("45.0Mbps"), "Mbps"), 45.0);
        assert_eq!(lenient_float(Some(" 3.25 "), ""), 3.25);
    }

    #[test]
    fn test_lenient_float_falls_back_to_zero() {
        assert_eq!(lenient_float(None, ""), 0.0);
        assert_eq!(lenient_float(Some(""), "Mbps"), 0.0);
        assert_eq!(lenient_float(Some("fast"), ""), 0.0);
        assert_eq!(lenient_float(Some("ms"), "ms"), 0.0);
    }

    #[test]
    fn test_strict_integer_missing_is_zero() {
        assert_eq!(strict_integer(KEY_CLIENTS, None).unwrap(), 0);
        assert_eq!(strict_integer(KEY_CLIENTS, Some(" 32 ")).unwrap(), 32);
    }

    #[test]
    fn test_strict_integer_rejects_garbage() {
        let err = strict_integer(KEY_CLIENTS, Some("eight")).unwrap_err();
        match err {
            ParseError::InvalidInteger { field, value, .. } => {
                assert_eq!(field, "Clientes");
                assert_eq!(value, "eight");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(strict_integer(KEY_PACKETS_SENT, Some("1.5")).is_err());
        assert!(strict_integer(KEY_PACKETS_SENT, Some("")).is_err());
    }

    #[test]
    fn test_defaults_for_empty_file() {
        let record = normalize_record(&parse_record_str(""), &ReportConfig::default()).unwrap();

        assert_eq!(record.client_count, 0);
        assert_eq!(record.protocol, "TCP");
        assert_eq!(record.mobility, "Nao");
        assert_eq!(record.loss_rate, 0.0);
        assert_eq!(record.avg_delay_ms, 0.0);
        assert_eq!(record.throughput_mbps, 0.0);
        assert_eq!(record.packets_sent, 0);
        assert_eq!(record.packets_received, 0);
        assert_eq!(record.packets_lost, 0);
    }

    #[test]
    fn test_categorical_defaults_come_from_config() {
        let config = ReportConfig {
            default_protocol: "UDP".to_string(),
            default_mobility: "Sim".to_string(),
            ..Default::default()
        };
        let record = normalize_record(&parse_record_str("Clientes,2"), &config).unwrap();

        assert_eq!(record.protocol, "UDP");
        assert_eq!(record.mobility, "Sim");
    }
}
