//! Rewriting decoded rows onto canonical keys.

use taxon_model::{HeaderMapping, Row};

/// Rewrites a row's keys from raw headers to their mapped names.
///
/// Values are copied verbatim. Keys are visited in the mapping's header order,
/// so when two raw headers map to the same canonical field the later column
/// wins. Keys absent from the mapping keep their original name and are applied
/// last.
pub fn map_row_to_canonical(row: &Row, mapping: &HeaderMapping) -> Row {
    let mut out = Row::new();
    for (raw, target) in mapping.iter() {
        if let Some(value) = row.get(raw) {
            out.insert(target.as_str(), value);
        }
    }
    for (key, value) in row {
        if mapping.get(key).is_none() {
            out.insert(key.as_str(), value.as_str());
        }
    }
    out
}

/// Applies [`map_row_to_canonical`] to every row, preserving order.
pub fn map_rows_to_canonical(rows: &[Row], mapping: &HeaderMapping) -> Vec<Row> {
    rows.iter()
        .map(|row| map_row_to_canonical(row, mapping))
        .collect()
}
