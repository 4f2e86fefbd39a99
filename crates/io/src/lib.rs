// File I/O - CSV and Excel decode/encode

use std::path::Path;

use sheetmatch_engine::{Dataset, FlatTable};

pub mod csv;
pub mod xlsx;

/// Decode a dataset, dispatching on the file extension.
/// `sheet` applies to Excel files only.
pub fn import(path: &Path, sheet: Option<&str>) -> Result<Dataset, String> {
    match extension(path).as_deref() {
        Some("csv") | Some("tsv") | Some("txt") => csv::import(path),
        Some("xlsx") | Some("xls") | Some("xlsb") | Some("ods") => xlsx::import(path, sheet),
        _ => Err(format!(
            "unsupported input format: {} (expected csv, tsv, xlsx, xls, xlsb, or ods)",
            path.display()
        )),
    }
}

/// Encode a flat result table, dispatching on the file extension.
pub fn export(table: &FlatTable, path: &Path) -> Result<(), String> {
    match extension(path).as_deref() {
        Some("csv") => csv::export(table, path),
        Some("xlsx") => xlsx::export(table, path),
        _ => Err(format!(
            "unsupported output format: {} (expected csv or xlsx)",
            path.display()
        )),
    }
}

/// Validate a decoded header row into the dataset's column list.
///
/// Trailing empty headers (padding columns Excel tools like to leave behind)
/// are dropped; an empty header in the middle of the row and duplicate names
/// are decode errors — the engine addresses cells by unique column name.
pub(crate) fn header_columns(mut raw: Vec<String>) -> Result<Vec<String>, String> {
    while raw.last().is_some_and(|h| h.is_empty()) {
        raw.pop();
    }
    if raw.is_empty() {
        return Err("input has no header row".to_string());
    }

    let mut seen = std::collections::HashSet::new();
    for (i, header) in raw.iter().enumerate() {
        if header.is_empty() {
            return Err(format!("column {} has an empty header", i + 1));
        }
        if !seen.insert(header.as_str()) {
            return Err(format!("duplicate column name '{header}'"));
        }
    }
    Ok(raw)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_rejects_unknown_extensions() {
        let err = import(Path::new("data.parquet"), None).unwrap_err();
        assert!(err.contains("unsupported input format"));

        let table = FlatTable {
            columns: vec![],
            rows: vec![],
        };
        let err = export(&table, Path::new("out.pdf")).unwrap_err();
        assert!(err.contains("unsupported output format"));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extension(Path::new("A.XLSX")).as_deref(), Some("xlsx"));
    }

    #[test]
    fn header_columns_trims_trailing_padding() {
        let cols =
            header_columns(vec!["a".into(), "b".into(), String::new(), String::new()]).unwrap();
        assert_eq!(cols, vec!["a", "b"]);
    }

    #[test]
    fn header_columns_rejects_interior_empty_and_duplicates() {
        let err = header_columns(vec!["a".into(), String::new(), "c".into()]).unwrap_err();
        assert!(err.contains("empty header"));

        let err = header_columns(vec!["a".into(), "a".into()]).unwrap_err();
        assert!(err.contains("duplicate column name 'a'"));

        let err = header_columns(vec![]).unwrap_err();
        assert!(err.contains("no header row"));
    }
}
