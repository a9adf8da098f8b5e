//! Workbook reading and header normalization.

use std::collections::BTreeMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info};

use vitals_model::{CountryTable, Snapshot, Value};

use crate::error::{LoadError, Result};

/// Normalizes a column header: strips BOM characters, trims surrounding
/// whitespace and lowercases, so "Date", " date " and "DATE" all key the
/// same column.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "").trim().to_lowercase()
}

fn cell_value(data: &Data) -> Value {
    match data {
        Data::Int(i) => Value::Number(*i as f64),
        Data::Float(f) if f.is_nan() => Value::Missing,
        Data::Float(f) => Value::Number(*f),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Missing
            } else {
                Value::Text(trimmed.to_string())
            }
        }
        Data::Bool(b) => Value::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Value::Text(datetime.date().to_string()),
            None => Value::Missing,
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Text(s.clone()),
        Data::Error(_) | Data::Empty => Value::Missing,
    }
}

/// Reads every sheet of the workbook at `path` into an immutable snapshot.
///
/// One sheet per country; the first row of each sheet is the header row.
/// Sheet names are kept verbatim, row order and values are preserved, and
/// fully empty rows are dropped. Repeated loads of an unchanged file yield
/// value-equal snapshots.
pub fn load_workbook(path: &Path) -> Result<Snapshot> {
    if !path.is_file() {
        return Err(LoadError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|error| LoadError::LoadFailure {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;

    let mut tables = BTreeMap::new();
    for sheet in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|error| LoadError::LoadFailure {
                path: path.to_path_buf(),
                message: format!("sheet '{sheet}': {error}"),
            })?;
        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            debug!(sheet = %sheet, "sheet is empty");
            tables.insert(sheet, CountryTable::new(Vec::new()));
            continue;
        };
        let columns: Vec<String> = header
            .iter()
            .map(|cell| normalize_header(&cell.to_string()))
            .collect();
        let mut table = CountryTable::new(columns);
        for row in rows {
            let values: Vec<Value> = row.iter().map(cell_value).collect();
            if values.iter().all(Value::is_missing) {
                continue;
            }
            table.push_row(values);
        }
        debug!(sheet = %sheet, rows = table.rows().len(), "loaded sheet");
        tables.insert(sheet, table);
    }

    info!(path = %path.display(), sheets = tables.len(), "workbook loaded");
    Ok(Snapshot::new(tables))
}
