//! Flattens match records into one tabular record set for display/export.

use serde::Serialize;

use crate::model::MatchResult;

/// A flat, rectangular table: every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One flat record per match record: `index`, `matched`, the left row's
/// columns prefixed `left_`, then the right row's columns prefixed `right_`.
///
/// The prefixes keep overlapping column names apart, and the two head
/// columns are unprefixed so they can never collide with a prefixed one.
/// The column set is identical for every row; right-side cells are empty
/// on unmatched rows.
pub fn flatten(result: &MatchResult) -> FlatTable {
    let mut columns = Vec::with_capacity(2 + result.left_columns.len() + result.right_columns.len());
    columns.push("index".to_string());
    columns.push("matched".to_string());
    for c in &result.left_columns {
        columns.push(format!("left_{c}"));
    }
    for c in &result.right_columns {
        columns.push(format!("right_{c}"));
    }

    let mut rows = Vec::with_capacity(result.records.len());
    for rec in &result.records {
        let mut row = Vec::with_capacity(columns.len());
        row.push(rec.left_index.to_string());
        row.push(if rec.matched { "yes" } else { "no" }.to_string());
        for c in &result.left_columns {
            row.push(rec.left_row.get(c).cloned().unwrap_or_default());
        }
        for c in &result.right_columns {
            row.push(
                rec.right_row
                    .as_ref()
                    .and_then(|r| r.get(c))
                    .cloned()
                    .unwrap_or_default(),
            );
        }
        rows.push(row);
    }

    FlatTable { columns, rows }
}
