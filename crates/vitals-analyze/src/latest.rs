use vitals_model::{MissingReason, Snapshot, Value};

use crate::error::{AnalyzeError, Result};

/// Outcome of a (country, indicator) latest-value lookup.
///
/// "Column absent" and "column present but no data" stay distinguishable so
/// callers can report which countries lack data and why.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum LatestValue {
    Value(Value),
    Missing(MissingReason),
}

/// Value in the last row of `country`'s table for `indicator`.
///
/// Pure read over the snapshot. An unknown country is an error; a known
/// country without the column or without data reports a `Missing` outcome.
pub fn latest_value(snapshot: &Snapshot, country: &str, indicator: &str) -> Result<LatestValue> {
    let table = snapshot
        .table(country)
        .ok_or_else(|| AnalyzeError::CountryNotFound {
            country: country.to_string(),
        })?;
    Ok(match table.latest(indicator) {
        None => LatestValue::Missing(MissingReason::ColumnAbsent),
        Some(Value::Missing) => LatestValue::Missing(MissingReason::NoData),
        Some(value) => LatestValue::Value(value),
    })
}
