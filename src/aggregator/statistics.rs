//! Descriptive statistics over a sample of metric values.

use serde::Serialize;

/// Mean, spread and range of one metric within a group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,

    /// Sample standard deviation; undefined for fewer than two values
    pub std: Option<f64>,

    pub min: f64,
    pub max: f64,
}

impl DescriptiveStats {
    /// Compute statistics for a sample
    ///
    /// **Public** - used per group and metric by the aggregator
    ///
    /// Non-finite values are skipped. Returns `None` for an empty sample;
    /// a sample with no finite value yields NaN statistics with `count` 0.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let Some(mean) = mean(&values) else {
            return Some(Self {
                count: 0,
                mean: f64::NAN,
                std: None,
                min: f64::NAN,
                max: f64::NAN,
            });
        };
        let count = values.len();

        // Sample (n - 1) variance
        let std = if count > 1 {
            let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            Some((sum_sq / (count - 1) as f64).sqrt())
        } else {
            None
        };

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std,
            min,
            max,
        })
    }

    /// Same statistics rounded to `decimals` places
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            count: self.count,
            mean: round_to(self.mean, decimals),
            std: self.std.map(|s| round_to(s, decimals)),
            min: round_to(self.min, decimals),
            max: round_to(self.max, decimals),
        }
    }
}

/// Arithmetic mean of the finite values, `None` when there are none
pub fn mean(values: &[f64]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
