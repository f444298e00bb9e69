//! Group experiment records by (protocol, mobility).
//!
//! Two orderings are used downstream: the statistics table lists groups
//! sorted by key, while the text summary and charts follow the order in
//! which protocols first appear in the dataset.

use super::statistics::DescriptiveStats;
use crate::parser::ExperimentRecord;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Decimal places kept in the statistics table
pub const STATISTICS_DECIMALS: i32 = 3;

/// Grouping key of the statistics table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub protocol: String,
    pub mobility: String,
}

impl GroupKey {
    pub fn new(protocol: impl Into<String>, mobility: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            mobility: mobility.into(),
        }
    }

    pub fn of(record: &ExperimentRecord) -> Self {
        Self::new(record.protocol.clone(), record.mobility.clone())
    }
}

/// Statistics of the three reported metrics for one group
#[derive(Debug, Clone, Serialize)]
pub struct GroupStatistics {
    #[serde(flatten)]
    pub key: GroupKey,
    /// Records in the group, including those with non-finite values
    pub count: usize,
    pub throughput: DescriptiveStats,
    pub delay: DescriptiveStats,
    pub loss: DescriptiveStats,
}

/// Group records by key, preserving record order inside each group
///
/// **Public** - shared by statistics and chart code
pub fn group_records(records: &[ExperimentRecord]) -> BTreeMap<GroupKey, Vec<&ExperimentRecord>> {
    let mut groups: BTreeMap<GroupKey, Vec<&ExperimentRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(GroupKey::of(record)).or_default().push(record);
    }
    groups
}

/// Records of one (protocol, mobility) pair, in dataset order
pub fn select_group<'a>(
    records: &'a [ExperimentRecord],
    protocol: &str,
    mobility: &str,
) -> Vec<&'a ExperimentRecord> {
    records
        .iter()
        .filter(|r| r.protocol == protocol && r.mobility == mobility)
        .collect()
}

/// Distinct protocols in order of first appearance
pub fn protocols_in_order(records: &[ExperimentRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if !seen.contains(&record.protocol.as_str()) {
            seen.push(&record.protocol);
        }
    }
    seen
}

/// Distinct mobility values in order of first appearance
pub fn mobilities_in_order(records: &[ExperimentRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if !seen.contains(&record.mobility.as_str()) {
            seen.push(&record.mobility);
        }
    }
    seen
}

/// Compute the statistics table
///
/// **Public** - main entry point for grouped statistics
///
/// # Returns
/// One entry per observed (protocol, mobility) pair, sorted by key,
/// with every value rounded to three decimals
pub fn calculate_group_statistics(records: &[ExperimentRecord]) -> Vec<GroupStatistics> {
    let groups = group_records(records);
    debug!(
        "Calculating statistics for {} group(s) from {} record(s)",
        groups.len(),
        records.len()
    );

    groups
        .into_iter()
        .filter_map(|(key, members)| {
            let throughput: Vec<f64> = members.iter().map(|r| r.throughput_mbps).collect();
            let delay: Vec<f64> = members.iter().map(|r| r.avg_delay_ms).collect();
            let loss: Vec<f64> = members.iter().map(|r| r.loss_rate).collect();

            Some(GroupStatistics {
                key,
                count: members.len(),
                throughput: DescriptiveStats::from_values(&throughput)?.rounded(STATISTICS_DECIMALS),
                delay: DescriptiveStats::from_values(&delay)?.rounded(STATISTICS_DECIMALS),
                loss: DescriptiveStats::from_values(&loss)?.rounded(STATISTICS_DECIMALS),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(protocol: &str, mobility: &str, throughput: f64) -> ExperimentRecord {
        ExperimentRecord {
            client_count: 1,
            protocol: protocol.to_string(),
            mobility: mobility.to_string(),
            loss_rate: 0.0,
            avg_delay_ms: 0.0,
            throughput_mbps: throughput,
            packets_sent: 0,
            packets_received: 0,
            packets_lost: 0,
        }
    }

    #[test]
    fn test_protocols_in_order() {
        let records = vec![
            record("UDP", "Nao", 1.0),
            record("TCP", "Sim", 1.0),
            record("UDP", "Sim", 1.0),
        ];
        assert_eq!(protocols_in_order(&records), vec!["UDP", "TCP"]);
        assert_eq!(mobilities_in_order(&records), vec!["Nao", "Sim"]);
    }

    #[test]
    fn test_groups_sorted_by_key() {
        let records = vec![
            record("UDP", "Nao", 1.0),
            record("TCP", "Sim", 2.0),
            record("TCP", "Nao", 3.0),
        ];
        let stats = calculate_group_statistics(&records);
        let keys: Vec<(&str, &str)> = stats
            .iter()
            .map(|s| (s.key.protocol.as_str(), s.key.mobility.as_str()))
            .collect();

        assert_eq!(keys, vec![("TCP", "Nao"), ("TCP", "Sim"), ("UDP", "Nao")]);
    }

    #[test]
    fn test_select_group() {
        let records = vec![record("TCP", "Nao", 1.0), record("TCP", "Sim", 2.0)];
        let group = select_group(&records, "TCP", "Sim");
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].throughput_mbps, 2.0);
        assert!(select_group(&records, "UDP", "Nao").is_empty());
    }
}
