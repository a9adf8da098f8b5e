//! Workbook ingestion: sheet loading, header normalization and snapshot
//! caching.

pub mod cache;
pub mod error;
pub mod workbook;

pub use cache::SnapshotCache;
pub use error::{LoadError, Result};
pub use workbook::{load_workbook, normalize_header};
