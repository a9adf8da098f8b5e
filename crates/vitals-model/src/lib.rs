//! Shared data model for per-country health indicator tables.

pub mod lookup;
pub mod table;
pub mod value;

pub use lookup::CountryNames;
pub use table::{CountryTable, DATE_COLUMN, Snapshot};
pub use value::{MissingReason, Value};
