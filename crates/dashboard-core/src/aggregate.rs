//! Scalar, grouped and time-keyed aggregation over order records.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::OrderRecord;

// ── QuantitySummary ───────────────────────────────────────────────────────────

/// Scalar summary statistics over a dataset's quantity field.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantitySummary {
    /// Arithmetic sum of all quantities.
    pub total: f64,
    /// `total / count`, or NaN when the dataset is empty. The mean over
    /// zero records is undefined, not zero.
    pub mean: f64,
    /// Number of records summarized.
    pub count: usize,
}

/// Compute total, mean and count over `records`.
pub fn summary(records: &[OrderRecord]) -> QuantitySummary {
    let total: f64 = records.iter().map(|r| r.quantity).sum();
    let count = records.len();
    let mean = if count > 0 {
        total / count as f64
    } else {
        f64::NAN
    };
    QuantitySummary { total, mean, count }
}

// ── Grouped aggregates ────────────────────────────────────────────────────────

/// Key selector: group records by customer.
pub fn by_customer(record: &OrderRecord) -> &str {
    &record.customer
}

/// Key selector: group records by item code.
pub fn by_item(record: &OrderRecord) -> &str {
    &record.item
}

/// Sum of quantity per distinct key observed in `records`.
///
/// Keys are derived from the data, so an empty group never appears. The
/// map's iteration order is unspecified; consumers sort before display.
pub fn group_total<'a, F>(records: &'a [OrderRecord], key_fn: F) -> HashMap<String, f64>
where
    F: Fn(&'a OrderRecord) -> &'a str,
{
    let mut totals: HashMap<String, f64> = HashMap::new();
    for record in records {
        *totals.entry(key_fn(record).to_string()).or_insert(0.0) += record.quantity;
    }
    totals
}

/// Arithmetic mean of quantity per distinct key observed in `records`.
///
/// Shares its key set with [`group_total`] over the same dataset; every
/// group has at least one record, so no division by zero can occur.
pub fn group_mean<'a, F>(records: &'a [OrderRecord], key_fn: F) -> HashMap<String, f64>
where
    F: Fn(&'a OrderRecord) -> &'a str,
{
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = sums.entry(key_fn(record).to_string()).or_insert((0.0, 0));
        entry.0 += record.quantity;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

// ── Daily series ──────────────────────────────────────────────────────────────

/// Quantity shipped on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyQuantity {
    pub date: NaiveDate,
    /// Total quantity across all customers on this day.
    pub total: f64,
    /// Per-customer breakdown for the day.
    pub per_customer: HashMap<String, f64>,
}

/// Aggregate `records` by calendar day, ascending.
///
/// Records whose date failed to parse carry no day and are excluded from
/// this view only; they still count in [`summary`] and the grouped
/// aggregates.
pub fn daily_totals(records: &[OrderRecord]) -> Vec<DailyQuantity> {
    let mut days: BTreeMap<NaiveDate, DailyQuantity> = BTreeMap::new();

    for record in records {
        let Some(date) = record.date else { continue };
        let day = days.entry(date).or_insert_with(|| DailyQuantity {
            date,
            total: 0.0,
            per_customer: HashMap::new(),
        });
        day.total += record.quantity;
        *day
            .per_customer
            .entry(record.customer.clone())
            .or_insert(0.0) += record.quantity;
    }

    days.into_values().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(
        date: Option<NaiveDate>,
        customer: &str,
        item: &str,
        quantity: f64,
    ) -> OrderRecord {
        OrderRecord {
            date,
            period: "Jan".to_string(),
            customer: customer.to_string(),
            item: item.to_string(),
            quantity,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── summary ───────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_totals() {
        let records = vec![
            make_record(None, "A", "X", 10.0),
            make_record(None, "B", "Y", 5.0),
        ];
        let s = summary(&records);
        assert_eq!(s.total, 15.0);
        assert_eq!(s.count, 2);
        assert!((s.mean - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_single_record() {
        let s = summary(&[make_record(None, "A", "X", 10.0)]);
        assert_eq!(s.total, 10.0);
        assert_eq!(s.count, 1);
        assert!((s.mean - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_over_filtered_view() {
        use crate::filter::filter_by_customer;
        use std::collections::HashSet;

        let records = vec![
            make_record(None, "A", "X", 10.0),
            make_record(None, "B", "Y", 5.0),
        ];
        let allowed: HashSet<String> = ["A".to_string()].into_iter().collect();
        let s = summary(&filter_by_customer(&records, &allowed));

        assert_eq!(s.total, 10.0);
        assert_eq!(s.count, 1);
        assert!((s.mean - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_empty_mean_is_undefined() {
        let s = summary(&[]);
        assert_eq!(s.total, 0.0);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
    }

    // ── group_total / group_mean ──────────────────────────────────────────────

    #[test]
    fn test_group_total_by_customer() {
        let records = vec![
            make_record(None, "A", "X", 10.0),
            make_record(None, "B", "Y", 5.0),
            make_record(None, "A", "Z", 2.0),
        ];
        let totals = group_total(&records, by_customer);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["A"], 12.0);
        assert_eq!(totals["B"], 5.0);
    }

    #[test]
    fn test_group_mean_by_item() {
        let records = vec![
            make_record(None, "A", "X", 10.0),
            make_record(None, "B", "X", 4.0),
            make_record(None, "C", "Y", 8.0),
        ];
        let means = group_mean(&records, by_item);
        assert!((means["X"] - 7.0).abs() < f64::EPSILON);
        assert!((means["Y"] - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_group_total_and_mean_share_key_sets() {
        let records = vec![
            make_record(None, "A", "X", 10.0),
            make_record(None, "B", "Y", 5.0),
            make_record(None, "A", "Z", 2.0),
        ];
        let totals = group_total(&records, by_item);
        let means = group_mean(&records, by_item);

        let mut total_keys: Vec<&String> = totals.keys().collect();
        let mut mean_keys: Vec<&String> = means.keys().collect();
        total_keys.sort();
        mean_keys.sort();
        assert_eq!(total_keys, mean_keys);
    }

    #[test]
    fn test_group_total_empty_dataset() {
        assert!(group_total(&[], by_customer).is_empty());
        assert!(group_mean(&[], by_customer).is_empty());
    }

    // ── daily_totals ──────────────────────────────────────────────────────────

    #[test]
    fn test_daily_totals_groups_and_sorts() {
        let records = vec![
            make_record(Some(day(2024, 1, 20)), "A", "X", 3.0),
            make_record(Some(day(2024, 1, 5)), "A", "X", 10.0),
            make_record(Some(day(2024, 1, 5)), "B", "Y", 5.0),
        ];
        let days = daily_totals(&records);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, day(2024, 1, 5));
        assert_eq!(days[0].total, 15.0);
        assert_eq!(days[0].per_customer["A"], 10.0);
        assert_eq!(days[0].per_customer["B"], 5.0);
        assert_eq!(days[1].date, day(2024, 1, 20));
        assert_eq!(days[1].total, 3.0);
    }

    #[test]
    fn test_daily_totals_excludes_absent_dates() {
        let records = vec![
            make_record(Some(day(2024, 1, 5)), "A", "X", 10.0),
            make_record(None, "B", "Y", 5.0),
        ];
        let days = daily_totals(&records);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].total, 10.0);
    }

    #[test]
    fn test_daily_totals_empty() {
        assert!(daily_totals(&[]).is_empty());
    }
}
