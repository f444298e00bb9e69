use netsim_report::aggregator::{
    calculate_group_means, calculate_group_statistics, group_records, GroupKey,
};
use netsim_report::parser::ExperimentRecord;
use pretty_assertions::assert_eq;

fn record(protocol: &str, mobility: &str, clients: u64, throughput: f64) -> ExperimentRecord {
    ExperimentRecord {
        client_count: clients,
        protocol: protocol.to_string(),
        mobility: mobility.to_string(),
        loss_rate: 2.0,
        avg_delay_ms: 10.0,
        throughput_mbps: throughput,
        packets_sent: 100,
        packets_received: 98,
        packets_lost: 2,
    }
}

#[test]
fn test_two_tcp_static_files() {
    let records = vec![record("TCP", "Nao", 4, 40.0), record("TCP", "Nao", 8, 50.0)];
    let stats = calculate_group_statistics(&records);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].key, GroupKey::new("TCP", "Nao"));
    assert_eq!(stats[0].throughput.mean, 45.0);
    assert_eq!(stats[0].throughput.min, 40.0);
    assert_eq!(stats[0].throughput.max, 50.0);
    assert_eq!(stats[0].throughput.std, Some(7.071));
    assert_eq!(stats[0].delay.std, Some(0.0));
}

#[test]
fn test_every_pair_appears_once() {
    let records = vec![
        record("UDP", "Sim", 1, 1.0),
        record("TCP", "Nao", 1, 2.0),
        record("MIXED", "Nao", 1, 3.0),
        record("TCP", "Nao", 2, 4.0),
        record("UDP", "Sim", 2, 5.0),
        record("TCP", "Sim", 1, 6.0),
    ];
    let stats = calculate_group_statistics(&records);
    let keys: Vec<GroupKey> = stats.iter().map(|s| s.key.clone()).collect();

    assert_eq!(
        keys,
        vec![
            GroupKey::new("MIXED", "Nao"),
            GroupKey::new("TCP", "Nao"),
            GroupKey::new("TCP", "Sim"),
            GroupKey::new("UDP", "Sim"),
        ]
    );
    assert_eq!(group_records(&records).len(), 4);
}

#[test]
fn test_single_sample_std_undefined() {
    let stats = calculate_group_statistics(&[record("UDP", "Sim", 1, 12.0)]);
    assert_eq!(stats[0].throughput.std, None);
    assert_eq!(stats[0].throughput.count, 1);
}

#[test]
fn test_statistics_rounded_to_three_decimals() {
    let records = vec![
        record("TCP", "Nao", 1, 1.0),
        record("TCP", "Nao", 2, 2.0),
        record("TCP", "Nao", 3, 2.0),
    ];
    let stats = calculate_group_statistics(&records);
    assert_eq!(stats[0].throughput.mean, 1.667);
    assert_eq!(stats[0].throughput.std, Some(0.577));
}

#[test]
fn test_means_skip_other_mobility_values() {
    let records = vec![
        record("TCP", "Talvez", 1, 1.0),
        record("TCP", "Sim", 1, 30.0),
    ];
    let means = calculate_group_means(&records);

    assert_eq!(means.len(), 1);
    assert_eq!(means[0].mobility, "Sim");
    assert_eq!(means[0].throughput_mbps, 30.0);

    // The statistics table still covers every observed pair
    assert_eq!(calculate_group_statistics(&records).len(), 2);
}

#[test]
fn test_nan_throughput_does_not_poison_group() {
    let records = vec![
        record("TCP", "Nao", 4, 40.0),
        record("TCP", "Nao", 8, f64::NAN),
        record("TCP", "Nao", 16, 50.0),
    ];
    let stats = calculate_group_statistics(&records);

    assert_eq!(stats[0].count, 3);
    assert_eq!(stats[0].throughput.count, 2);
    assert_eq!(stats[0].throughput.mean, 45.0);
    assert_eq!(stats[0].throughput.max, 50.0);
    assert_eq!(stats[0].delay.count, 3);

    let means = calculate_group_means(&records);
    assert_eq!(means[0].throughput_mbps, 45.0);
}
