//! Aggregation of experiment records into grouped statistics.
//!
//! This module transforms the record set into:
//! - Per-group descriptive statistics (statistics table)
//! - Per-group means (text summary)

pub mod grouping;
pub mod statistics;
pub mod summary;

// Re-export main types and functions
pub use grouping::{
    calculate_group_statistics, group_records, mobilities_in_order, protocols_in_order,
    select_group, GroupKey, GroupStatistics,
};
pub use statistics::{mean, DescriptiveStats};
pub use summary::{calculate_group_means, generate_text_summary, GroupMeans};
