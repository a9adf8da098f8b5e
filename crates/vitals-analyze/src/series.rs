use vitals_model::{DATE_COLUMN, Snapshot};

use crate::error::{AnalyzeError, Result};

/// One point of a comparison series. `value` is `None` where the cell holds
/// no numeric data, preserving row alignment between the two series of a
/// comparison so the time axes line up.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: Option<f64>,
}

/// One country's indicator series over its date axis — half of the
/// two-country comparison chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ComparisonSeries {
    pub country: String,
    pub indicator: String,
    pub points: Vec<SeriesPoint>,
}

impl ComparisonSeries {
    pub fn build(snapshot: &Snapshot, country: &str, indicator: &str) -> Result<Self> {
        let canonical =
            snapshot
                .resolve_country(country)
                .ok_or_else(|| AnalyzeError::CountryNotFound {
                    country: country.to_string(),
                })?;
        let table = snapshot
            .table(canonical)
            .ok_or_else(|| AnalyzeError::CountryNotFound {
                country: country.to_string(),
            })?;
        let date_index =
            table
                .column_index(DATE_COLUMN)
                .ok_or_else(|| AnalyzeError::DateColumnMissing {
                    country: canonical.to_string(),
                })?;
        let value_index =
            table
                .column_index(indicator)
                .ok_or_else(|| AnalyzeError::ColumnAbsent {
                    country: canonical.to_string(),
                    indicator: indicator.to_string(),
                })?;
        let points = table
            .rows()
            .iter()
            .map(|row| SeriesPoint {
                date: row[date_index].to_string(),
                value: row[value_index].as_number(),
            })
            .collect();
        Ok(Self {
            country: canonical.to_string(),
            indicator: indicator.to_string(),
            points,
        })
    }

    /// Numeric values of the series, gaps removed. Input for the
    /// mean/median/mode statistics shown next to the comparison chart.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().filter_map(|point| point.value).collect()
    }
}
