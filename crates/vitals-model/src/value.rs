use std::fmt;

/// A single cell of a country table.
///
/// Empty cells, spreadsheet error cells and float NaN all normalize to
/// `Missing` at load time, so downstream code never has to reason about NaN
/// arithmetic or sentinel strings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Number(f64),
    Text(String),
    Missing,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) | Value::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(text) => f.write_str(text),
            Value::Missing => f.write_str(""),
        }
    }
}

/// Why a (country, indicator) lookup produced no usable value.
///
/// The two cases stay distinct all the way to the caller: a country whose
/// sheet never had the column reports `ColumnAbsent`, while a country whose
/// sheet has the column but no usable value in the relevant row reports
/// `NoData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    ColumnAbsent,
    NoData,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::ColumnAbsent => f.write_str("column absent"),
            MissingReason::NoData => f.write_str("no data"),
        }
    }
}
