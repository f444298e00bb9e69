//! Text summary of mean metrics per protocol and mobility.

use super::grouping::{protocols_in_order, select_group};
use super::statistics::mean;
use crate::parser::ExperimentRecord;
use crate::utils::config::{mobility_label, SUMMARY_MOBILITY_ORDER};

/// Mean metrics of one (protocol, mobility) group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMeans {
    pub protocol: String,
    pub mobility: String,
    pub throughput_mbps: f64,
    pub avg_delay_ms: f64,
    pub loss_rate: f64,
}

/// Mean metrics for the summary report
///
/// **Public** - protocols in first-seen order, mobility "Nao" then "Sim";
/// empty groups are left out
pub fn calculate_group_means(records: &[ExperimentRecord]) -> Vec<GroupMeans> {
    let mut means = Vec::new();

    for protocol in protocols_in_order(records) {
        for mobility in SUMMARY_MOBILITY_ORDER {
            let group = select_group(records, protocol, mobility);
            let throughput: Vec<f64> = group.iter().map(|r| r.throughput_mbps).collect();
            let delay: Vec<f64> = group.iter().map(|r| r.avg_delay_ms).collect();
            let loss: Vec<f64> = group.iter().map(|r| r.loss_rate).collect();

            if let (Some(throughput_mbps), Some(avg_delay_ms), Some(loss_rate)) =
                (mean(&throughput), mean(&delay), mean(&loss))
            {
                means.push(GroupMeans {
                    protocol: protocol.to_string(),
                    mobility: mobility.to_string(),
                    throughput_mbps,
                    avg_delay_ms,
                    loss_rate,
                });
            }
        }
    }

    means
}

/// Render the statistical report printed at the end of a run
pub fn generate_text_summary(records: &[ExperimentRecord]) -> String {
    let mut lines = Vec::new();
    let rule = "=".repeat(60);

    lines.push(rule.clone());
    lines.push("STATISTICAL REPORT".to_string());
    lines.push(rule);

    let means = calculate_group_means(records);

    // Every protocol gets a header, even without a static or mobile group
    for protocol in protocols_in_order(records) {
        lines.push(String::new());
        lines.push(format!("{}:", protocol));

        for group in means.iter().filter(|g| g.protocol == protocol) {
            lines.push(format!("  {}:", mobility_label(&group.mobility)));
            lines.push(format!("    Mean throughput: {:.2} Mbps", group.throughput_mbps));
            lines.push(format!("    Mean delay: {:.2} ms", group.avg_delay_ms));
            lines.push(format!("    Mean loss: {:.2} %", group.loss_rate));
        }
    }

    lines.join("\n")
}
