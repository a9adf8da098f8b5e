//! Indicator resolution and derived view datasets over a loaded snapshot.
//!
//! Everything in this crate is a pure read of an immutable
//! [`vitals_model::Snapshot`]; per-entry failures inside aggregates are
//! collected as skip reports rather than aborting the operation.

pub mod catalog;
pub mod error;
pub mod latest;
pub mod map;
pub mod ranking;
pub mod series;
pub mod stats;

pub use catalog::indicator_catalog;
pub use error::{AnalyzeError, Result};
pub use latest::{LatestValue, latest_value};
pub use map::{MapDataset, MapEntry};
pub use ranking::{RankEntry, Ranking, SkippedCountry};
pub use series::{ComparisonSeries, SeriesPoint};
pub use stats::{SeriesStats, indicator_stats};
