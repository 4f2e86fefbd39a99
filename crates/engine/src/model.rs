use std::collections::HashMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One row of a dataset: column name → raw cell value.
///
/// Cells that were empty in the source file are simply absent; an empty
/// string is equivalent to an absent cell (see [`Dataset::cell`]).
pub type Row = HashMap<String, String>;

/// An in-memory tabular dataset: ordered column names plus ordered rows.
///
/// Immutable for the duration of a comparison run. Column names are unique
/// within a dataset — the IO layer rejects duplicate headers at decode time.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Raw cell value, or `None` when the row has no value for the column.
    /// Empty strings count as missing — they come from blank spreadsheet
    /// cells and must never match anything.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows
            .get(row)?
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Per-left-row outcome. Exactly one record per left row, in left order.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub left_index: usize,
    pub left_row: Row,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_row: Option<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

/// Full engine output: metadata, summary, and the per-row records.
///
/// Carries both datasets' column orders so the result assembler can lay out
/// a stable flat table without touching the input datasets again.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub meta: MatchMeta,
    pub summary: MatchSummary,
    pub left_columns: Vec<String>,
    pub right_columns: Vec<String>,
    pub records: Vec<MatchRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_is_missing() {
        let mut ds = Dataset::new(vec!["a".into(), "b".into()]);
        ds.push_row(Row::from([("a".to_string(), "x".to_string()), ("b".to_string(), String::new())]));

        assert_eq!(ds.cell(0, "a"), Some("x"));
        assert_eq!(ds.cell(0, "b"), None, "empty string is the missing marker");
        assert_eq!(ds.cell(0, "c"), None);
        assert_eq!(ds.cell(1, "a"), None, "out-of-range row");
    }

    #[test]
    fn has_column_checks_names() {
        let ds = Dataset::new(vec!["id".into(), "amount".into()]);
        assert!(ds.has_column("id"));
        assert!(!ds.has_column("Amount"), "column names are case-sensitive");
    }
}
