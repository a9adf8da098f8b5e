use std::path::Path;
use std::sync::Arc;

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use vitals_ingest::SnapshotCache;
use vitals_model::Value;

fn write_fixture(path: &Path, mortality: f64) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("France").expect("sheet name");
    sheet.write_string(0, 0, "date").expect("write header");
    sheet.write_string(0, 1, "infant mortality").expect("write header");
    sheet.write_number(1, 0, 2000.0).expect("write cell");
    sheet.write_number(1, 1, mortality).expect("write cell");
    workbook.save(path).expect("save workbook");
}

fn latest_mortality(snapshot: &vitals_model::Snapshot) -> Option<Value> {
    snapshot
        .table("France")
        .and_then(|table| table.latest("infant mortality"))
}

#[test]
fn get_or_load_reads_the_file_once() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("indicators.xlsx");
    write_fixture(&path, 4.4);

    let cache = SnapshotCache::new(&path);
    assert!(cache.get().is_none());

    let first = cache.get_or_load().expect("first load");
    // A rewrite on disk is invisible until an explicit refresh.
    write_fixture(&path, 9.9);
    let second = cache.get_or_load().expect("cached load");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(latest_mortality(&second), Some(Value::Number(4.4)));
}

#[test]
fn refresh_swaps_in_new_data() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("indicators.xlsx");
    write_fixture(&path, 4.4);

    let cache = SnapshotCache::new(&path);
    let stale = cache.get_or_load().expect("first load");

    write_fixture(&path, 9.9);
    let fresh = cache.refresh().expect("refresh");

    // The old Arc is still intact for in-flight readers.
    assert_eq!(latest_mortality(&stale), Some(Value::Number(4.4)));
    assert_eq!(latest_mortality(&fresh), Some(Value::Number(9.9)));
}

#[test]
fn invalidate_forces_a_reload() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("indicators.xlsx");
    write_fixture(&path, 4.4);

    let cache = SnapshotCache::new(&path);
    cache.get_or_load().expect("first load");

    write_fixture(&path, 9.9);
    cache.invalidate();
    assert!(cache.get().is_none());

    let reloaded = cache.get_or_load().expect("reload");
    assert_eq!(latest_mortality(&reloaded), Some(Value::Number(9.9)));
}

#[test]
fn load_errors_are_not_cached() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("indicators.xlsx");

    let cache = SnapshotCache::new(&path);
    assert!(cache.get_or_load().is_err());

    write_fixture(&path, 4.4);
    let snapshot = cache.get_or_load().expect("load after file appears");
    assert_eq!(latest_mortality(&snapshot), Some(Value::Number(4.4)));
}
