use std::collections::BTreeSet;

use vitals_model::{DATE_COLUMN, Snapshot};

/// Union of indicator column names across every country table, excluding the
/// "date" time axis. An empty snapshot yields an empty set; this never fails.
///
/// The set is sorted, so repeated calls on the same snapshot produce the same
/// selection menu.
pub fn indicator_catalog(snapshot: &Snapshot) -> BTreeSet<String> {
    let mut catalog = BTreeSet::new();
    for (_, table) in snapshot.tables() {
        for column in table.columns() {
            if column != DATE_COLUMN && !column.is_empty() {
                catalog.insert(column.clone());
            }
        }
    }
    catalog
}
