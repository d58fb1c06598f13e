//! Text rendering of engine results.
//!
//! Every renderer is a pure function from computed results to a printable
//! string; `main` decides what to compute and in which order to print.

use std::collections::HashMap;

use dashboard_core::aggregate::{DailyQuantity, QuantitySummary};
use dashboard_core::formatting::{format_mean, format_number};
use dashboard_core::models::OrderRecord;
use dashboard_core::rank::RankedItem;

/// The headline metric row: total, average and record count, plus a banner
/// line when rows were excluded for non-numeric quantities.
pub fn render_metrics(summary: &QuantitySummary, rejected_rows: u32) -> String {
    let mut out = format!(
        "Total QTY: {}   Average QTY: {}   Records: {}",
        format_number(summary.total, 0),
        format_mean(summary.mean),
        summary.count
    );
    if rejected_rows > 0 {
        out.push_str(&format!(
            "\n({} row{} excluded: non-numeric quantity)",
            rejected_rows,
            if rejected_rows == 1 { "" } else { "s" }
        ));
    }
    out
}

/// Per-customer totals, largest first. Ties sort by name so the output is
/// deterministic; the engine's map carries no order of its own.
pub fn render_customer_totals(totals: &HashMap<String, f64>) -> String {
    let mut rows: Vec<(&str, f64)> = totals.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let width = column_width(rows.iter().map(|(name, _)| *name), 8);
    let mut out = String::from("Total QTY by customer\n");
    for (name, total) in rows {
        out.push_str(&format!(
            "  {:<width$}  {:>10}\n",
            name,
            format_number(total, 0),
        ));
    }
    out
}

/// The top-items table with the joined per-item average.
pub fn render_top_items(items: &[RankedItem]) -> String {
    let width = column_width(items.iter().map(|i| i.key.as_str()), 8);
    let mut out = format!("Top {} items by ordered quantity\n", items.len());
    for item in items {
        out.push_str(&format!(
            "  {:<width$}  total {:>10}  avg {:>10}\n",
            item.key,
            format_number(item.total, 0),
            format_mean(item.mean),
        ));
    }
    out
}

/// The per-day series. Days arrive sorted from the engine.
pub fn render_daily(days: &[DailyQuantity]) -> String {
    let mut out = String::from("QTY over time\n");
    for day in days {
        out.push_str(&format!(
            "  {}  {:>10}\n",
            day.date.format("%Y-%m-%d"),
            format_number(day.total, 0),
        ));
    }
    out
}

/// The filtered record table.
pub fn render_records(records: &[OrderRecord]) -> String {
    let customer_width = column_width(records.iter().map(|r| r.customer.as_str()), 8);
    let item_width = column_width(records.iter().map(|r| r.item.as_str()), 8);

    let mut out = String::from("Filtered records\n");
    for record in records {
        let date = record
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {:<10}  {:<8}  {:<customer_width$}  {:<item_width$}  {:>10}\n",
            date,
            record.period,
            record.customer,
            record.item,
            format_number(record.quantity, 0),
        ));
    }
    out
}

fn column_width<'a>(names: impl Iterator<Item = &'a str>, minimum: usize) -> usize {
    names.map(str::len).max().unwrap_or(0).max(minimum)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
