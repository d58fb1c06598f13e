mod bootstrap;
mod render;
mod settings;

use std::collections::HashSet;

use anyhow::Result;
use clap::Parser;

use dashboard_core::error::DashboardError;
use dashboard_core::models::{NormalizedSheet, OrderRecord};
use dashboard_core::{aggregate, filter, normalize, rank};
use dashboard_data::cache::WorkbookCache;

use settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::parse();
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("qty-dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        workbook = %settings.workbook.display(),
        view = %settings.view,
        "loading workbook"
    );

    let mut cache = WorkbookCache::new(&settings.workbook);
    let sheets = cache.get()?;

    let (dataset, rejected_rows) = select_dataset(sheets, &settings)?;

    // Default filter selection: every customer present in the chosen view.
    let allowed: HashSet<String> = if settings.customers.is_empty() {
        filter::distinct_customers(&dataset).into_iter().collect()
    } else {
        settings.customers.iter().cloned().collect()
    };
    let filtered = filter::filter_by_customer(&dataset, &allowed);

    let summary = aggregate::summary(&filtered);
    let customer_totals = aggregate::group_total(&filtered, aggregate::by_customer);
    let daily = aggregate::daily_totals(&filtered);
    let top = rank::top_items(&filtered, settings.top)?;

    println!("{}", render::render_metrics(&summary, rejected_rows));
    println!();
    println!("{}", render::render_customer_totals(&customer_totals));
    println!("{}", render::render_top_items(&top));
    println!("{}", render::render_daily(&daily));

    if settings.records {
        println!("{}", render::render_records(&filtered));
    }

    Ok(())
}

/// Pick the combined dataset or a single period's records, mirroring the
/// view-mode selection. In period view an unset `--period` falls back to
/// the first sheet.
fn select_dataset(
    sheets: &[NormalizedSheet],
    settings: &Settings,
) -> Result<(Vec<OrderRecord>, u32)> {
    if settings.view == "period" {
        let sheet = match &settings.period {
            Some(period) => sheets
                .iter()
                .find(|s| s.period == *period)
                .ok_or_else(|| DashboardError::UnknownPeriod(period.clone()))?,
            None => sheets
                .first()
                .ok_or_else(|| DashboardError::UnknownPeriod("<none>".to_string()))?,
        };
        Ok((sheet.records.clone(), sheet.rejected_rows))
    } else {
        Ok((normalize::combine(sheets), normalize::total_rejected(sheets)))
    }
}
