//! Configuration and constants for the report pipeline.

use std::path::{Path, PathBuf};

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Directory scanned when none is given on the command line
pub const DEFAULT_RESULTS_DIR: &str = "resultados_projeto";

/// Result files are named `resultados_<anything>.txt`
pub const RESULT_FILE_PATTERN: &str = "resultados_*.txt";

pub const CONSOLIDATED_FILE_NAME: &str = "resultados_consolidados.csv";
pub const STATISTICS_FILE_NAME: &str = "estatisticas_detalhadas.csv";
pub const CHART_FILE_NAME: &str = "comparacao_completa.svg";

// Keys written by the simulator
pub const KEY_CLIENTS: &str = "Clientes";
pub const KEY_PROTOCOL: &str = "Protocolo";
pub const KEY_MOBILITY: &str = "Mobilidade";
pub const KEY_LOSS_RATE: &str = "TaxaPerda";
pub const KEY_AVG_DELAY: &str = "AtrasoMedio_ms";
pub const KEY_THROUGHPUT: &str = "Vazao_Mbps";
pub const KEY_PACKETS_SENT: &str = "PacotesTransmitidos";
pub const KEY_PACKETS_RECEIVED: &str = "PacotesRecebidos";
pub const KEY_PACKETS_LOST: &str = "PacotesPerdidos";

// Unit tokens stripped before float conversion
pub const LOSS_RATE_UNIT: &str = "";
pub const AVG_DELAY_UNIT: &str = "ms";
pub const THROUGHPUT_UNIT: &str = "Mbps";

pub const DEFAULT_PROTOCOL: &str = "TCP";
pub const DEFAULT_MOBILITY: &str = "Nao";

/// Mobility values reported in the text summary, in print order
pub const MOBILITY_STATIC: &str = "Nao";
pub const MOBILITY_MOBILE: &str = "Sim";
pub const SUMMARY_MOBILITY_ORDER: [&str; 2] = [MOBILITY_STATIC, MOBILITY_MOBILE];

/// Column order of the consolidated table
pub const CONSOLIDATED_COLUMNS: [&str; 9] = [
    "Clientes",
    "Protocolo",
    "Mobilidade",
    "TaxaPerda",
    "AtrasoMedio",
    "Vazao",
    "PacotesTransmitidos",
    "PacotesRecebidos",
    "PacotesPerdidos",
];

/// Human label for a mobility flag
pub fn mobility_label(mobility: &str) -> &str {
    match mobility {
        MOBILITY_MOBILE => "Mobile",
        MOBILITY_STATIC => "Static",
        other => other,
    }
}

/// Settings shared by every stage of a run.
///
/// All file names resolve inside `results_dir`.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub results_dir: PathBuf,
    pub file_pattern: String,
    pub consolidated_file: String,
    pub statistics_file: String,
    pub chart_file: String,
    pub default_protocol: String,
    pub default_mobility: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            file_pattern: RESULT_FILE_PATTERN.to_string(),
            consolidated_file: CONSOLIDATED_FILE_NAME.to_string(),
            statistics_file: STATISTICS_FILE_NAME.to_string(),
            chart_file: CHART_FILE_NAME.to_string(),
            default_protocol: DEFAULT_PROTOCOL.to_string(),
            default_mobility: DEFAULT_MOBILITY.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    pub fn consolidated_path(&self) -> PathBuf {
        self.results_dir.join(&self.consolidated_file)
    }

    pub fn statistics_path(&self) -> PathBuf {
        self.results_dir.join(&self.statistics_file)
    }

    pub fn chart_path(&self) -> PathBuf {
        self.results_dir.join(&self.chart_file)
    }

    /// Glob pattern for result files, with the directory part escaped
    pub fn discovery_pattern(&self) -> String {
        let dir = glob::Pattern::escape(&self.results_dir.to_string_lossy());
        Path::new(&dir)
            .join(&self.file_pattern)
            .to_string_lossy()
            .into_owned()
    }
}
