use std::collections::BTreeMap;

use vitals_analyze::{
    AnalyzeError, ComparisonSeries, LatestValue, MapDataset, Ranking, indicator_catalog,
    latest_value,
};
use vitals_model::{CountryTable, MissingReason, Snapshot, Value};

/// Four countries over one indicator "x":
/// A has x = 5.0, B has x = 12.0, C has no x column, D has x but no value in
/// its last row.
fn snapshot() -> Snapshot {
    let mut tables = BTreeMap::new();

    let mut a = CountryTable::new(vec!["date".to_string(), "x".to_string()]);
    a.push_row(vec![Value::Number(2000.0), Value::Number(4.0)]);
    a.push_row(vec![Value::Number(2001.0), Value::Number(5.0)]);
    tables.insert("A".to_string(), a);

    let mut b = CountryTable::new(vec!["date".to_string(), "x".to_string()]);
    b.push_row(vec![Value::Number(2000.0), Value::Number(12.0)]);
    tables.insert("B".to_string(), b);

    let mut c = CountryTable::new(vec!["date".to_string(), "y".to_string()]);
    c.push_row(vec![Value::Number(2000.0), Value::Number(7.0)]);
    tables.insert("C".to_string(), c);

    let mut d = CountryTable::new(vec!["date".to_string(), "x".to_string()]);
    d.push_row(vec![Value::Number(2000.0), Value::Number(3.0)]);
    d.push_row(vec![Value::Number(2001.0), Value::Missing]);
    tables.insert("D".to_string(), d);

    Snapshot::new(tables)
}

#[test]
fn catalog_excludes_date_and_is_idempotent() {
    let snapshot = snapshot();
    let catalog = indicator_catalog(&snapshot);
    let names: Vec<&str> = catalog.iter().map(String::as_str).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(indicator_catalog(&snapshot), catalog);
}

#[test]
fn catalog_of_empty_snapshot_is_empty() {
    let snapshot = Snapshot::new(BTreeMap::new());
    assert!(indicator_catalog(&snapshot).is_empty());
}

#[test]
fn latest_value_distinguishes_absent_from_no_data() {
    let snapshot = snapshot();
    assert_eq!(
        latest_value(&snapshot, "A", "x").expect("lookup"),
        LatestValue::Value(Value::Number(5.0))
    );
    assert_eq!(
        latest_value(&snapshot, "C", "x").expect("lookup"),
        LatestValue::Missing(MissingReason::ColumnAbsent)
    );
    assert_eq!(
        latest_value(&snapshot, "D", "x").expect("lookup"),
        LatestValue::Missing(MissingReason::NoData)
    );
    assert!(matches!(
        latest_value(&snapshot, "Z", "x"),
        Err(AnalyzeError::CountryNotFound { .. })
    ));
}

#[test]
fn ranking_sorts_descending_and_reports_skips() {
    let ranking = Ranking::build(&snapshot(), "x");
    let ordered: Vec<(&str, f64)> = ranking
        .entries
        .iter()
        .map(|entry| (entry.country.as_str(), entry.value))
        .collect();
    assert_eq!(ordered, vec![("B", 12.0), ("A", 5.0)]);

    let skipped: Vec<(&str, MissingReason)> = ranking
        .skipped
        .iter()
        .map(|skip| (skip.country.as_str(), skip.reason))
        .collect();
    assert!(skipped.contains(&("C", MissingReason::ColumnAbsent)));
    assert!(skipped.contains(&("D", MissingReason::NoData)));
}

#[test]
fn ranking_of_unknown_indicator_is_empty_not_an_error() {
    let ranking = Ranking::build(&snapshot(), "z");
    assert!(ranking.is_empty());
    assert_eq!(ranking.skipped.len(), 4);
}

#[test]
fn map_dataset_keeps_only_valid_entries() {
    let map = MapDataset::build(&snapshot(), "x");
    let countries: Vec<&str> = map
        .entries
        .iter()
        .map(|entry| entry.country.as_str())
        .collect();
    assert_eq!(countries, vec!["A", "B"]);

    let skipped: Vec<(&str, MissingReason)> = map
        .skipped
        .iter()
        .map(|skip| (skip.country.as_str(), skip.reason))
        .collect();
    assert_eq!(
        skipped,
        vec![
            ("C", MissingReason::ColumnAbsent),
            ("D", MissingReason::NoData)
        ]
    );
}

#[test]
fn comparison_series_preserves_gaps() {
    let series = ComparisonSeries::build(&snapshot(), "d", "x").expect("series");
    assert_eq!(series.country, "D");
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.points[0].date, "2000");
    assert_eq!(series.points[0].value, Some(3.0));
    assert_eq!(series.points[1].value, None);
    assert_eq!(series.values(), vec![3.0]);
}

#[test]
fn comparison_series_errors() {
    let snapshot = snapshot();
    assert!(matches!(
        ComparisonSeries::build(&snapshot, "Z", "x"),
        Err(AnalyzeError::CountryNotFound { .. })
    ));
    assert!(matches!(
        ComparisonSeries::build(&snapshot, "C", "x"),
        Err(AnalyzeError::ColumnAbsent { .. })
    ));
}

#[test]
fn datasets_serialize_for_json_output() {
    let map = MapDataset::build(&snapshot(), "x");
    let json = serde_json::to_value(&map).expect("serialize map dataset");
    assert_eq!(json["indicator"], "x");
    assert_eq!(json["entries"][0]["country"], "A");
    assert_eq!(json["skipped"][1]["reason"], "no_data");
}
