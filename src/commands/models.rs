use crate::utils::config::{ReportConfig, DEFAULT_RESULTS_DIR};
use std::path::PathBuf;

/// Arguments for the process command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProcessArgs {
    /// Directory holding the `resultados_*.txt` files; outputs are written here too
    pub results_dir: PathBuf,

    /// Render the comparison chart
    pub render_chart: bool,

    /// Chart title (None = default title)
    pub chart_title: Option<String>,

    pub chart_width: usize,
    pub chart_height: usize,

    /// Chart theme name, resolved when the chart is rendered
    pub theme: String,

    /// Optional path for a JSON run report
    pub json_report: Option<PathBuf>,
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            render_chart: true,
            chart_title: None,
            chart_width: 1600,
            chart_height: 1200,
            theme: "light".to_string(),
            json_report: None,
        }
    }
}

impl ProcessArgs {
    /// Pipeline configuration for these arguments
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new(self.results_dir.clone())
    }
}

/// Outcome of a process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Outputs were written
    Completed { records: usize, skipped: usize },

    /// Nothing to report; no output files were written
    NoData { reason: String },
}
