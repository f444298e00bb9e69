use netsim_report::parser::{lenient_float, normalize_record, parse_record_file, parse_record_str};
use netsim_report::parser::ExperimentRecord;
use netsim_report::utils::config::ReportConfig;
use netsim_report::utils::error::ParseError;
use pretty_assertions::assert_eq;

const SCENARIO_A: &str = "Clientes,8\nProtocolo,TCP\nMobilidade,Nao\nTaxaPerda,1.5\n\
AtrasoMedio_ms,12.3\nVazao_Mbps,45.0\nPacotesTransmitidos,1000\nPacotesRecebidos,985\n\
PacotesPerdidos,15";

fn normalize(content: &str) -> Result<ExperimentRecord, ParseError> {
    normalize_record(&parse_record_str(content), &ReportConfig::default())
}

#[test]
fn test_well_formed_file() {
    let record = normalize(SCENARIO_A).unwrap();

    assert_eq!(
        record,
        ExperimentRecord {
            client_count: 8,
            protocol: "TCP".to_string(),
            mobility: "Nao".to_string(),
            loss_rate: 1.5,
            avg_delay_ms: 12.3,
            throughput_mbps: 45.0,
            packets_sent: 1000,
            packets_received: 985,
            packets_lost: 15,
        }
    );
}

#[test]
fn test_empty_float_value_is_zero() {
    let record = normalize("Clientes,4\nVazao_Mbps,\n").unwrap();
    assert_eq!(record.throughput_mbps, 0.0);
    assert_eq!(record.client_count, 4);
}

#[test]
fn test_unit_suffixes_are_stripped() {
    let record = normalize("AtrasoMedio_ms,12.3 ms\nVazao_Mbps,45.5Mbps\nTaxaPerda, 2.25 ").unwrap();
    assert_eq!(record.avg_delay_ms, 12.3);
    assert_eq!(record.throughput_mbps, 45.5);
    assert_eq!(record.loss_rate, 2.25);
}

#[test]
fn test_malformed_floats_never_fail() {
    let record = normalize("TaxaPerda,n/a\nAtrasoMedio_ms,--\nVazao_Mbps,lots").unwrap();
    assert_eq!(record.loss_rate, 0.0);
    assert_eq!(record.avg_delay_ms, 0.0);
    assert_eq!(record.throughput_mbps, 0.0);
}

#[test]
fn test_malformed_integer_fails_file() {
    let result = normalize("Clientes,8\nPacotesPerdidos,fifteen");
    assert!(matches!(
        result,
        Err(ParseError::InvalidInteger { field: "PacotesPerdidos", .. })
    ));
}

#[test]
fn test_no_recognized_keys_gives_defaults() {
    let raw = parse_record_str("TempoSim,30\nrandom text\n");
    assert_eq!(raw.recognized_keys(), 0);

    let record = normalize_record(&raw, &ReportConfig::default()).unwrap();
    assert_eq!(record.client_count, 0);
    assert_eq!(record.protocol, "TCP");
    assert_eq!(record.mobility, "Nao");
    assert_eq!(record.throughput_mbps, 0.0);
    assert_eq!(record.packets_sent, 0);
}

#[test]
fn test_unknown_protocol_kept_verbatim() {
    let record = normalize("Protocolo,Misto").unwrap();
    assert_eq!(record.protocol, "Misto");
}

#[test]
fn test_parse_record_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resultados_TCP_8clientes_estatico.txt");
    std::fs::write(&path, SCENARIO_A).unwrap();

    let raw = parse_record_file(&path).unwrap();
    assert_eq!(raw.recognized_keys(), 9);
    assert_eq!(raw.throughput.as_deref(), Some("45.0"));
}

#[test]
fn test_lenient_float_policy() {
    assert_eq!(lenient_float(Some("3.5"), ""), 3.5);
    assert_eq!(lenient_float(Some(""), ""), 0.0);
    assert_eq!(lenient_float(None, "ms"), 0.0);
    assert!(lenient_float(Some("nan"), "").is_nan());
}
