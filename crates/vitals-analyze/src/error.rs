use thiserror::Error;

/// Errors surfaced by indicator resolution and dataset construction.
///
/// Per-entry conditions inside an aggregate (one country lacking a column)
/// are not errors; they are collected as skip reports on the dataset itself.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// No sheet matches the requested country name.
    #[error("unknown country: {country}")]
    CountryNotFound { country: String },

    /// The requested indicator column does not exist for this country.
    #[error("country {country} has no '{indicator}' column")]
    ColumnAbsent { country: String, indicator: String },

    /// The sheet has no "date" column to use as a time axis.
    #[error("country {country} has no 'date' column")]
    DateColumnMissing { country: String },

    /// A ranking or map selection produced no valid entries at all.
    #[error("no valid data for indicator '{indicator}'")]
    EmptySelection { indicator: String },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
