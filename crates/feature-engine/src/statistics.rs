//! Column Statistics

use serde::Serialize;

/// Descriptive statistics for a numeric column
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnStats {
    /// Number of values
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Median value
    pub median: f64,
    /// Maximum value
    pub max: f64,
}

impl ColumnStats {
    /// Compute statistics from a slice of values
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        let mean = values.iter().sum::<f64>() / n;

        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        Self {
            count: values.len(),
            mean,
            std_dev: variance.sqrt(),
            min,
            median: median(values).unwrap_or_default(),
            max,
        }
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linear interpolation between closest ranks on already sorted data
fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Quantile `q` (0..=1) using linear interpolation between closest ranks.
/// Returns `None` for an empty slice.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted_copy(values), q)
}

/// Median; the mean of the two middle values for even-length input
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Box-plot summary with Tukey fences at 1.5 × IQR
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value inside the lower fence (end of lower whisker)
    pub lower_fence: f64,
    /// Largest value inside the upper fence (end of upper whisker)
    pub upper_fence: f64,
    /// Values beyond the fences, ascending
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarize a group of values; `None` when the group is empty
    pub fn compute(values: &[f64]) -> Option<Self> {
        let sorted = sorted_copy(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;

        let iqr = q3 - q1;
        let low_limit = q1 - 1.5 * iqr;
        let high_limit = q3 + 1.5 * iqr;

        let inside = || sorted.iter().copied().filter(|v| *v >= low_limit && *v <= high_limit);
        // q1 and q3 lie inside the limits, so both folds see at least one value
        let lower_fence = inside().fold(f64::MAX, f64::min);
        let upper_fence = inside().fold(f64::MIN, f64::max);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_limit || *v > high_limit)
            .collect();

        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_fence,
            upper_fence,
            outliers,
        })
    }
}
