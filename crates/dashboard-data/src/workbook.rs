//! Workbook discovery and loading.
//!
//! Opens a spreadsheet file, reads every sheet's cells, and converts each
//! data row into the column-name → value maps consumed by
//! [`normalize_sheet`]. The first row of a sheet is its header row; sheets
//! keep workbook order, which downstream becomes period order.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use serde_json::{Map, Number, Value};
use tracing::debug;

use dashboard_core::error::{DashboardError, Result};
use dashboard_core::models::NormalizedSheet;
use dashboard_core::normalize::{normalize_sheet, RawRow};

/// One sheet's raw contents, before normalization.
#[derive(Debug, Clone)]
pub struct RawSheet {
    /// The sheet's name; used as the period label.
    pub name: String,
    /// Data rows in sheet order, keyed by the sheet's header names.
    pub rows: Vec<RawRow>,
}

/// Read every sheet of the workbook at `path`, in workbook order.
///
/// The format (xls, xlsx, xlsb, ods) is auto-detected. Open and read
/// failures surface as [`DashboardError::WorkbookRead`]; a workbook without
/// sheets is [`DashboardError::NoSheets`].
pub fn read_workbook(path: &Path) -> Result<Vec<RawSheet>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| DashboardError::WorkbookRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(DashboardError::NoSheets(path.to_path_buf()));
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| DashboardError::WorkbookRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let rows = sheet_rows(&range);
        debug!(sheet = %name, rows = rows.len(), "sheet read");
        sheets.push(RawSheet { name, rows });
    }

    Ok(sheets)
}

/// Read and normalize every sheet of the workbook at `path`.
///
/// Fails on the first sheet with a schema violation, blocking the whole
/// load.
pub fn load_normalized(path: &Path) -> Result<Vec<NormalizedSheet>> {
    read_workbook(path)?
        .iter()
        .map(|sheet| normalize_sheet(&sheet.name, &sheet.rows))
        .collect()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert a cell range into header-keyed rows.
///
/// The first row supplies the headers. Every data row gets a key for every
/// non-empty header, with `Value::Null` standing in for missing cells, so
/// the normalizer can check the schema against any row.
fn sheet_rows(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows_iter = range.rows();
    let Some(header_cells) = rows_iter.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_cells.iter().map(header_text).collect();

    rows_iter
        .map(|cells| {
            let mut row = Map::with_capacity(headers.len());
            for (i, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let value = cells.get(i).map(cell_to_value).unwrap_or(Value::Null);
                row.insert(header.clone(), value);
            }
            row
        })
        .collect()
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a spreadsheet cell onto the JSON value the normalizer consumes.
///
/// Native date-time cells become their Excel serial number, which the
/// core's date parser understands; ISO date-time cells stay strings.
fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => Number::from_f64(dt.as_f64())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Error(_) => Value::Null,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
