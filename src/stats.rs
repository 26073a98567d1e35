use crate::config::ChartConfig;
use crate::models::Dataset;
use serde::{Deserialize, Serialize};

/// Value range of all plotted data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub minimum: f64,
    pub maximum: f64,
    /// `maximum - minimum`, or 1.0 when that is not positive.
    pub spread: f64,
}

/// A dataset with values mapped into `0.0..=1.0` of the extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDataset {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// True when at least one dataset has a present value.
pub fn has_data(datasets: &[Dataset]) -> bool {
    datasets.iter().any(|d| d.present_values().next().is_some())
}

/// Number of columns: the longest dataset.
pub fn column_count(datasets: &[Dataset]) -> usize {
    datasets.iter().map(|d| d.values.len()).max().unwrap_or(0)
}

/// Compute min/max/spread over all present values, honoring the configured
/// `minimum_value` / `maximum_value` overrides. Returns `None` without data.
pub fn calculate_spread(datasets: &[Dataset], cfg: &ChartConfig) -> Option<Extent> {
    let mut values = datasets.iter().flat_map(|d| d.present_values()).peekable();
    values.peek()?;
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let minimum = cfg.minimum_value.unwrap_or(lo);
    let maximum = cfg.maximum_value.unwrap_or(hi);
    let spread = maximum - minimum;
    Some(Extent {
        minimum,
        maximum,
        spread: if spread > 0.0 { spread } else { 1.0 },
    })
}

/// Map every value to `(v - minimum) / spread`; missing values stay missing.
pub fn normalize(datasets: &[Dataset], extent: &Extent) -> Vec<NormalizedDataset> {
    datasets
        .iter()
        .map(|d| NormalizedDataset {
            label: d.label.clone(),
            values: d
                .values
                .iter()
                .map(|v| v.map(|v| (v - extent.minimum) / extent.spread))
                .collect(),
        })
        .collect()
}
