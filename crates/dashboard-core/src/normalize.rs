//! Sheet normalization and multi-sheet combining.
//!
//! Turns the raw column-name → cell-value rows handed over by the workbook
//! reader into typed [`OrderRecord`]s, one sheet at a time, and concatenates
//! per-period sheets into a single dataset.

use serde_json::{Map, Value};
use tracing::debug;

use crate::cells::{DateParser, QuantityParser};
use crate::error::{DashboardError, Result};
use crate::models::{NormalizedSheet, OrderRecord};

/// Column holding the order date.
pub const DATE_COLUMN: &str = "Date";
/// Column holding the customer name.
pub const CUSTOMER_COLUMN: &str = "CUSTOMER";
/// Column holding the item code.
pub const ITEM_COLUMN: &str = "Item";
/// Column holding the ordered quantity.
pub const QTY_COLUMN: &str = "QTY";

/// Every column a sheet must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [DATE_COLUMN, CUSTOMER_COLUMN, ITEM_COLUMN, QTY_COLUMN];

/// One raw sheet row: column name → raw cell value.
pub type RawRow = Map<String, Value>;

/// Normalize one sheet's rows into records stamped with `period`.
///
/// The schema is validated up front: a sheet whose rows do not carry all of
/// [`REQUIRED_COLUMNS`] fails with [`DashboardError::MissingColumn`] before
/// any row is processed. The reader emits every header as a key on every
/// row, so the first row carries the sheet's full column set.
///
/// Per-row behavior:
/// * An unparseable date leaves `date` as `None`; the row is kept.
/// * An unparseable quantity excludes the row and increments
///   `rejected_rows`. Quantities are never coerced to zero.
///
/// Output order matches input row order.
pub fn normalize_sheet(period: &str, rows: &[RawRow]) -> Result<NormalizedSheet> {
    check_schema(period, rows)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut rejected_rows = 0u32;

    for row in rows {
        let quantity = match row.get(QTY_COLUMN).and_then(QuantityParser::parse) {
            Some(q) => q,
            None => {
                rejected_rows += 1;
                continue;
            }
        };

        records.push(OrderRecord {
            date: row.get(DATE_COLUMN).and_then(DateParser::parse),
            period: period.to_string(),
            customer: cell_text(row.get(CUSTOMER_COLUMN)),
            item: cell_text(row.get(ITEM_COLUMN)),
            quantity,
        });
    }

    debug!(
        sheet = period,
        records = records.len(),
        rejected = rejected_rows,
        "sheet normalized"
    );

    Ok(NormalizedSheet {
        period: period.to_string(),
        records,
        rejected_rows,
    })
}

/// Concatenate normalized sheets, in the order given, into one dataset.
///
/// Each sheet's internal row order is preserved and no record is dropped,
/// merged or deduplicated.
pub fn combine(sheets: &[NormalizedSheet]) -> Vec<OrderRecord> {
    let total: usize = sheets.iter().map(|s| s.records.len()).sum();
    let mut dataset = Vec::with_capacity(total);
    for sheet in sheets {
        dataset.extend(sheet.records.iter().cloned());
    }
    dataset
}

/// Sum of quantity-rejected row counts across sheets.
pub fn total_rejected(sheets: &[NormalizedSheet]) -> u32 {
    sheets.iter().map(|s| s.rejected_rows).sum()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn check_schema(period: &str, rows: &[RawRow]) -> Result<()> {
    let Some(first) = rows.first() else {
        // An empty sheet has no schema to violate.
        return Ok(());
    };

    for column in REQUIRED_COLUMNS {
        if !first.contains_key(column) {
            return Err(DashboardError::MissingColumn {
                sheet: period.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Text content of a customer or item cell. Item codes sometimes arrive as
/// numbers, so numeric cells are rendered rather than discarded.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
