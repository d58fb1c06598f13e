//! Top-N ranking with a joined secondary statistic.

use std::collections::{HashMap, HashSet};

use crate::aggregate::{by_item, group_mean, group_total};
use crate::error::{DashboardError, Result};
use crate::models::OrderRecord;

/// One entry of a top-N ranking: the group key, its summed quantity, and the
/// per-key mean joined on afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub key: String,
    pub total: f64,
    pub mean: f64,
}

/// Rank the keys of `records` by summed quantity, descending, and join each
/// survivor's mean from `means`.
///
/// The sort is stable over first-encountered key order, so tied totals keep
/// the order in which their keys first appear in the dataset. `n == 0`
/// yields an empty result; `n` larger than the number of distinct keys
/// yields all of them.
///
/// `means` must cover every key of `records`; in practice it comes from
/// [`group_mean`] over the same dataset. A missing key is reported as
/// [`DashboardError::RankJoin`] rather than silently defaulted.
pub fn top_n_with_secondary<'a, F>(
    records: &'a [OrderRecord],
    key_fn: F,
    n: usize,
    means: &HashMap<String, f64>,
) -> Result<Vec<RankedItem>>
where
    F: Fn(&'a OrderRecord) -> &'a str,
{
    let totals = group_total(records, &key_fn);

    // Keys in first-encountered order; the stable sort below preserves this
    // order among equal totals.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ranked: Vec<(&str, f64)> = Vec::new();
    for record in records {
        let key = key_fn(record);
        if seen.insert(key) {
            ranked.push((key, totals.get(key).copied().unwrap_or(0.0)));
        }
    }

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(key, total)| {
            let mean = means
                .get(key)
                .copied()
                .ok_or_else(|| DashboardError::RankJoin(key.to_string()))?;
            Ok(RankedItem {
                key: key.to_string(),
                total,
                mean,
            })
        })
        .collect()
}

/// Top `n` items by total quantity with per-item means, both statistics
/// computed over the same `records`.
pub fn top_items(records: &[OrderRecord], n: usize) -> Result<Vec<RankedItem>> {
    let means = group_mean(records, by_item);
    top_n_with_secondary(records, by_item, n, &means)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(customer: &str, item: &str, quantity: f64) -> OrderRecord {
        OrderRecord {
            date: None,
            period: "Jan".to_string(),
            customer: customer.to_string(),
            item: item.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_top_one_item_with_mean() {
        let records = vec![
            make_record("A", "X", 10.0),
            make_record("A", "X", 4.0),
            make_record("B", "Y", 8.0),
        ];
        let top = top_items(&records, 1).unwrap();

        assert_eq!(top.len(), 1);
        assert_eq!(top[0].key, "X");
        assert_eq!(top[0].total, 14.0);
        assert!((top[0].mean - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ranking_is_descending() {
        let records = vec![
            make_record("A", "X", 1.0),
            make_record("A", "Y", 9.0),
            make_record("A", "Z", 5.0),
        ];
        let top = top_items(&records, 3).unwrap();
        let keys: Vec<&str> = top.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Y", "Z", "X"]);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let records = vec![
            make_record("A", "M", 5.0),
            make_record("A", "N", 5.0),
            make_record("A", "O", 5.0),
        ];
        let top = top_items(&records, 3).unwrap();
        let keys: Vec<&str> = top.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["M", "N", "O"]);
    }

    #[test]
    fn test_n_zero_yields_empty() {
        let records = vec![make_record("A", "X", 1.0)];
        assert!(top_items(&records, 0).unwrap().is_empty());
    }

    #[test]
    fn test_n_beyond_distinct_keys_yields_all() {
        let records = vec![
            make_record("A", "X", 1.0),
            make_record("A", "Y", 2.0),
        ];
        let top = top_items(&records, 10).unwrap();
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_empty_dataset_yields_empty() {
        assert!(top_items(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn test_foreign_mean_map_is_a_join_failure() {
        let records = vec![make_record("A", "X", 1.0)];
        let empty_means = HashMap::new();
        let err = top_n_with_secondary(&records, by_item, 1, &empty_means).unwrap_err();
        match err {
            DashboardError::RankJoin(key) => assert_eq!(key, "X"),
            other => panic!("expected RankJoin, got {other:?}"),
        }
    }
}
