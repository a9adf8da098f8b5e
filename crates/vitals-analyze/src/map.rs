use tracing::debug;

use vitals_model::{MissingReason, Snapshot};

use crate::ranking::SkippedCountry;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapEntry {
    pub country: String,
    pub value: f64,
}

/// Per-country single-value dataset for a choropleth, keyed by country name
/// and restricted to countries with a valid latest value for the indicator.
///
/// Entries come out in country order; the caller owns any color scaling or
/// projection. Countries without a value are reported in `skipped` rather
/// than silently dropped.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapDataset {
    pub indicator: String,
    pub entries: Vec<MapEntry>,
    pub skipped: Vec<SkippedCountry>,
}

impl MapDataset {
    pub fn build(snapshot: &Snapshot, indicator: &str) -> Self {
        let mut entries = Vec::new();
        let mut skipped = Vec::new();
        for (country, table) in snapshot.tables() {
            match table.latest(indicator) {
                None => {
                    debug!(country, indicator, "indicator column absent");
                    skipped.push(SkippedCountry {
                        country: country.to_string(),
                        reason: MissingReason::ColumnAbsent,
                    });
                }
                Some(value) => match value.as_number() {
                    Some(number) => entries.push(MapEntry {
                        country: country.to_string(),
                        value: number,
                    }),
                    None => {
                        debug!(country, indicator, "no usable latest value");
                        skipped.push(SkippedCountry {
                            country: country.to_string(),
                            reason: MissingReason::NoData,
                        });
                    }
                },
            }
        }
        Self {
            indicator: indicator.to_string(),
            entries,
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
