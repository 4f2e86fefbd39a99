// Excel import/export (xlsx, xls, xlsb, ods)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::Workbook;

use sheetmatch_engine::{Dataset, FlatTable, Row};

use crate::header_columns;

/// Sheet name used for exported results.
pub const RESULTS_SHEET: &str = "Results";

/// Decode one worksheet into a dataset. The first row is the header row;
/// `sheet` selects a worksheet by name, defaulting to the first one.
pub fn import(path: &Path, sheet: Option<&str>) -> Result<Dataset, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("failed to open {}: {e}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err("workbook contains no sheets".to_string());
    }

    let name = match sheet {
        Some(s) => sheet_names
            .iter()
            .find(|n| n.as_str() == s)
            .cloned()
            .ok_or_else(|| {
                format!("no sheet named '{s}' (available: {})", sheet_names.join(", "))
            })?,
        None => sheet_names[0].clone(),
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| format!("failed to read sheet '{name}': {e}"))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| format!("sheet '{name}' is empty"))?;
    let columns =
        header_columns(header.iter().map(|c| render_cell(c).trim().to_string()).collect())?;

    let mut dataset = Dataset::new(columns);

    for cells in rows {
        let mut row = Row::new();
        for (i, column) in dataset.columns.iter().enumerate() {
            if let Some(cell) = cells.get(i) {
                let value = render_cell(cell);
                if !value.is_empty() {
                    row.insert(column.clone(), value);
                }
            }
        }
        dataset.push_row(row);
    }

    Ok(dataset)
}

/// Render a typed cell to the raw string form the engine's normalizers
/// expect: integral floats without decimals, dates as ISO strings.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => {
                // Small epsilon: serial fractions are float time-of-day
                if dt.as_f64().fract().abs() > 0.0001 {
                    ndt.format("%Y-%m-%d %H:%M:%S").to_string()
                } else {
                    ndt.date().format("%Y-%m-%d").to_string()
                }
            }
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Write the flattened result table as a one-sheet workbook.
pub fn export(table: &FlatTable, path: &Path) -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(RESULTS_SHEET)
        .map_err(|e| format!("failed to create results sheet: {e}"))?;

    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(|e| e.to_string())?;
    }

    for (r, row) in table.rows.iter().enumerate() {
        let row_idx = (r + 1) as u32;
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            // Numeric cells go out as numbers so downstream tools can sum them
            match value.parse::<f64>() {
                Ok(n) if n.is_finite() => worksheet
                    .write_number(row_idx, c as u16, n)
                    .map_err(|e| e.to_string())?,
                _ => worksheet
                    .write_string(row_idx, c as u16, value)
                    .map_err(|e| e.to_string())?,
            };
        }
    }

    workbook
        .save(path)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    Ok(())
}
