use std::collections::BTreeMap;

use crate::lookup::CountryNames;
use crate::value::Value;

/// Column name reserved for the time axis of every sheet.
pub const DATE_COLUMN: &str = "date";

/// One workbook sheet: an ordered sequence of rows under normalized column
/// names. Row order is insertion order from the source and is treated as
/// chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl CountryTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding or truncating to the header width.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Missing);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Value in the last row for `name`.
    ///
    /// `None` means the column does not exist for this table; a table that
    /// has the column but no rows yields `Value::Missing`.
    pub fn latest(&self, name: &str) -> Option<Value> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .last()
                .map_or(Value::Missing, |row| row[index].clone()),
        )
    }
}

/// Immutable view of one loaded workbook: sheet name -> table.
///
/// Never mutated after construction, so shared references are safe across
/// any number of simultaneous view renders.
#[derive(Debug, Clone)]
pub struct Snapshot {
    tables: BTreeMap<String, CountryTable>,
    names: CountryNames,
}

impl Snapshot {
    pub fn new(tables: BTreeMap<String, CountryTable>) -> Self {
        let names = CountryNames::new(tables.keys());
        Self { tables, names }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Sheet names in sorted order, verbatim as stored in the workbook.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &CountryTable)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Canonical sheet name for `country`, folding case and surrounding
    /// whitespace. Column names and country names share this one
    /// normalization policy.
    pub fn resolve_country(&self, country: &str) -> Option<&str> {
        self.names.canonical(country)
    }

    pub fn table(&self, country: &str) -> Option<&CountryTable> {
        let canonical = self.resolve_country(country)?;
        self.tables.get(canonical)
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CountryTable {
        let mut table = CountryTable::new(vec!["date".to_string(), "x".to_string()]);
        table.push_row(vec![Value::Number(2000.0), Value::Number(5.0)]);
        table.push_row(vec![Value::Number(2001.0), Value::Missing]);
        table
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = CountryTable::new(vec!["date".to_string(), "x".to_string()]);
        table.push_row(vec![Value::Number(2000.0)]);
        assert_eq!(table.rows()[0], vec![Value::Number(2000.0), Value::Missing]);
    }

    #[test]
    fn latest_distinguishes_absent_from_missing() {
        let table = table();
        assert_eq!(table.latest("y"), None);
        assert_eq!(table.latest("x"), Some(Value::Missing));
        assert_eq!(table.latest("date"), Some(Value::Number(2001.0)));
    }

    #[test]
    fn snapshot_resolves_country_names() {
        let mut tables = BTreeMap::new();
        tables.insert("France".to_string(), table());
        let snapshot = Snapshot::new(tables);
        assert_eq!(snapshot.resolve_country(" france "), Some("France"));
        assert!(snapshot.table("FRANCE").is_some());
        assert!(snapshot.table("Germany").is_none());
    }
}
