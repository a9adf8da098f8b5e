use vitals_model::{Snapshot, Value};

use crate::error::{AnalyzeError, Result};

/// Descriptive statistics over one numeric series.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SeriesStats {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
}

impl SeriesStats {
    /// Mean, median and mode of `values`. `None` when the series is empty
    /// (rendered as "N/A" by callers).
    ///
    /// The median of an even-length series is the midpoint of the two middle
    /// values; a multimodal series reports the smallest of the most frequent
    /// values.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len();

        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        let mut mode = sorted[0];
        let mut best_run = 0;
        let mut start = 0;
        while start < n {
            let mut end = start;
            while end < n && sorted[end] == sorted[start] {
                end += 1;
            }
            if end - start > best_run {
                best_run = end - start;
                mode = sorted[start];
            }
            start = end;
        }

        Some(Self { mean, median, mode })
    }
}

/// Statistics for one (country, indicator) series, skipping missing cells.
pub fn indicator_stats(
    snapshot: &Snapshot,
    country: &str,
    indicator: &str,
) -> Result<Option<SeriesStats>> {
    let table = snapshot
        .table(country)
        .ok_or_else(|| AnalyzeError::CountryNotFound {
            country: country.to_string(),
        })?;
    let values = table
        .column(indicator)
        .ok_or_else(|| AnalyzeError::ColumnAbsent {
            country: country.to_string(),
            indicator: indicator.to_string(),
        })?;
    let numeric: Vec<f64> = values
        .into_iter()
        .filter_map(Value::as_number)
        .collect();
    Ok(SeriesStats::compute(&numeric))
}
