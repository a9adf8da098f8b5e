use tracing::debug;

use vitals_model::{MissingReason, Snapshot};

/// A country left out of a ranking or map dataset, with the reason.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SkippedCountry {
    pub country: String,
    pub reason: MissingReason,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankEntry {
    pub country: String,
    pub value: f64,
}

/// Ranking of countries by the latest value of one indicator, descending.
///
/// Countries without a usable value never abort the build; they are collected
/// in `skipped` with their reason. A latest value that exists but is not
/// numeric cannot be ranked and counts as `NoData`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Ranking {
    pub indicator: String,
    pub entries: Vec<RankEntry>,
    pub skipped: Vec<SkippedCountry>,
}

impl Ranking {
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
                    Some(number) => entries.push(RankEntry {
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
        entries.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.country.cmp(&b.country))
        });
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
