use netsim_report::commands::{execute_process, validate_table_file, ProcessArgs, ProcessOutcome};
use netsim_report::output::{read_consolidated, read_report};
use netsim_report::utils::config::ReportConfig;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_result(dir: &Path, name: &str, clients: u64, protocol: &str, mobility: &str, vazao: &str) {
    let content = format!(
        "Clientes,{clients}\nProtocolo,{protocol}\nMobilidade,{mobility}\nTaxaPerda,1.5\n\
AtrasoMedio_ms,12.3\nVazao_Mbps,{vazao}\nPacotesTransmitidos,1000\nPacotesRecebidos,985\n\
PacotesPerdidos,15\nTempoSim,30\n"
    );
    fs::write(dir.join(name), content).unwrap();
}

fn args_for(dir: &Path) -> ProcessArgs {
    ProcessArgs {
        results_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_full_pipeline_writes_all_outputs() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_TCP_4.txt", 4, "TCP", "Nao", "40");
    write_result(dir.path(), "resultados_TCP_8.txt", 8, "TCP", "Nao", "50");
    write_result(dir.path(), "resultados_UDP_4.txt", 4, "UDP", "Sim", "30.5");
    fs::write(dir.path().join("notas.txt"), "Clientes,99").unwrap();

    let report_path = dir.path().join("report").join("run.json");
    let args = ProcessArgs {
        json_report: Some(report_path.clone()),
        ..args_for(dir.path())
    };

    let outcome = execute_process(&args).unwrap();
    assert_eq!(outcome, ProcessOutcome::Completed { records: 3, skipped: 0 });

    let config = ReportConfig::new(dir.path());
    let records = read_consolidated(config.consolidated_path()).unwrap();
    let clients: Vec<u64> = records.iter().map(|r| r.client_count).collect();
    assert_eq!(clients, vec![4, 8, 4]);

    let stats = fs::read_to_string(config.statistics_path()).unwrap();
    assert!(stats.contains("TCP,Nao,45.0,7.071,40.0,50.0"));
    assert!(stats.contains("UDP,Sim,30.5,,30.5,30.5"));

    let svg = fs::read_to_string(config.chart_path()).unwrap();
    assert!(svg.starts_with("<svg"));

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.record_count, 3);
    assert_eq!(report.groups.len(), 2);

    assert_eq!(validate_table_file(config.consolidated_path()).unwrap(), 3);
}

#[test]
fn test_rerun_produces_identical_tables() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_a.txt", 2, "MIXED", "Sim", "12.75");
    write_result(dir.path(), "resultados_b.txt", 6, "TCP", "Nao", "44.1");

    let config = ReportConfig::new(dir.path());
    let args = args_for(dir.path());

    execute_process(&args).unwrap();
    let consolidated = fs::read(config.consolidated_path()).unwrap();
    let statistics = fs::read(config.statistics_path()).unwrap();
    let chart = fs::read(config.chart_path()).unwrap();

    execute_process(&args).unwrap();
    assert_eq!(fs::read(config.consolidated_path()).unwrap(), consolidated);
    assert_eq!(fs::read(config.statistics_path()).unwrap(), statistics);
    assert_eq!(fs::read(config.chart_path()).unwrap(), chart);
}

#[test]
fn test_bad_file_is_skipped() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_ok.txt", 4, "TCP", "Nao", "40");
    fs::write(dir.path().join("resultados_bad.txt"), "Clientes,many\n").unwrap();

    let outcome = execute_process(&args_for(dir.path())).unwrap();
    assert_eq!(outcome, ProcessOutcome::Completed { records: 1, skipped: 1 });
}

#[test]
fn test_empty_directory_writes_nothing() {
    let dir = tempdir().unwrap();

    let outcome = execute_process(&args_for(dir.path())).unwrap();
    assert!(matches!(outcome, ProcessOutcome::NoData { .. }));

    let config = ReportConfig::new(dir.path());
    assert!(!config.consolidated_path().exists());
    assert!(!config.statistics_path().exists());
    assert!(!config.chart_path().exists());
}

#[test]
fn test_missing_directory_is_no_data() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("resultados_projeto");

    let outcome = execute_process(&args_for(&missing)).unwrap();
    assert!(matches!(outcome, ProcessOutcome::NoData { .. }));
    assert!(!missing.exists());
}

#[test]
fn test_all_files_failing_is_no_data() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("resultados_x.txt"), "PacotesTransmitidos,-3\n").unwrap();

    let outcome = execute_process(&args_for(dir.path())).unwrap();
    assert!(matches!(outcome, ProcessOutcome::NoData { .. }));
    assert!(!ReportConfig::new(dir.path()).consolidated_path().exists());
}

#[test]
fn test_unknown_theme_fails_after_tables() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_a.txt", 4, "UDP", "Nao", "10");

    let args = ProcessArgs {
        theme: "neon".to_string(),
        ..args_for(dir.path())
    };

    assert!(execute_process(&args).is_err());

    let config = ReportConfig::new(dir.path());
    assert!(config.consolidated_path().exists());
    assert!(config.statistics_path().exists());
    assert!(!config.chart_path().exists());
}

#[test]
fn test_chart_can_be_skipped() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_a.txt", 4, "UDP", "Nao", "10");

    let args = ProcessArgs {
        render_chart: false,
        theme: "neon".to_string(),
        ..args_for(dir.path())
    };

    assert!(execute_process(&args).is_ok());
    assert!(!ReportConfig::new(dir.path()).chart_path().exists());
}

#[test]
fn test_empty_result_file_adds_no_row() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_a.txt", 4, "UDP", "Sim", "10");
    fs::write(dir.path().join("resultados_empty.txt"), "").unwrap();

    let outcome = execute_process(&args_for(dir.path())).unwrap();
    assert_eq!(outcome, ProcessOutcome::Completed { records: 1, skipped: 1 });

    let records = read_consolidated(ReportConfig::new(dir.path()).consolidated_path()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].protocol, "UDP");
}

#[test]
fn test_nan_value_is_left_out_of_statistics() {
    let dir = tempdir().unwrap();
    write_result(dir.path(), "resultados_1.txt", 4, "TCP", "Nao", "40");
    write_result(dir.path(), "resultados_2.txt", 8, "TCP", "Nao", "nan");
    write_result(dir.path(), "resultados_3.txt", 16, "TCP", "Nao", "50");

    execute_process(&args_for(dir.path())).unwrap();

    let stats = fs::read_to_string(ReportConfig::new(dir.path()).statistics_path()).unwrap();
    assert!(stats.contains("TCP,Nao,45.0,7.071,40.0,50.0"));
}
