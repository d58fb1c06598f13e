use std::collections::HashSet;

use crate::models::OrderRecord;

/// Keep the records whose customer is in `allowed`, preserving relative
/// order.
///
/// Exact set membership: an empty `allowed` set selects nothing, and the
/// full set of customers present in `records` selects everything,
/// element-for-element. The operation is idempotent.
pub fn filter_by_customer(records: &[OrderRecord], allowed: &HashSet<String>) -> Vec<OrderRecord> {
    records
        .iter()
        .filter(|r| allowed.contains(&r.customer))
        .cloned()
        .collect()
}

/// Distinct customers present in `records`, in first-encountered order.
///
/// This is the default filter selection: a view that has not narrowed the
/// customer set shows every customer.
pub fn distinct_customers(records: &[OrderRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut customers = Vec::new();
    for record in records {
        if seen.insert(&record.customer) {
            customers.push(record.customer.clone());
        }
    }
    customers
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(customer: &str, quantity: f64) -> OrderRecord {
        OrderRecord {
            date: None,
            period: "Jan".to_string(),
            customer: customer.to_string(),
            item: "X".to_string(),
            quantity,
        }
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_membership() {
        let records = vec![
            make_record("A", 10.0),
            make_record("B", 5.0),
            make_record("A", 2.0),
        ];
        let filtered = filter_by_customer(&records, &set(&["A"]));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.customer == "A"));
    }

    #[test]
    fn test_filter_empty_set_selects_nothing() {
        let records = vec![make_record("A", 10.0)];
        assert!(filter_by_customer(&records, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_filter_full_set_returns_dataset_unchanged() {
        let records = vec![
            make_record("A", 10.0),
            make_record("B", 5.0),
            make_record("C", 1.0),
        ];
        let all: HashSet<String> = distinct_customers(&records).into_iter().collect();
        assert_eq!(filter_by_customer(&records, &all), records);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            make_record("A", 10.0),
            make_record("B", 5.0),
            make_record("A", 2.0),
        ];
        let allowed = set(&["A"]);
        let once = filter_by_customer(&records, &allowed);
        let twice = filter_by_customer(&once, &allowed);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = vec![
            make_record("B", 1.0),
            make_record("A", 2.0),
            make_record("B", 3.0),
        ];
        let filtered = filter_by_customer(&records, &set(&["B"]));
        let quantities: Vec<f64> = filtered.iter().map(|r| r.quantity).collect();
        assert_eq!(quantities, vec![1.0, 3.0]);
    }

    #[test]
    fn test_distinct_customers_first_encountered_order() {
        let records = vec![
            make_record("B", 1.0),
            make_record("A", 2.0),
            make_record("B", 3.0),
            make_record("C", 4.0),
        ];
        assert_eq!(distinct_customers(&records), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_distinct_customers_empty() {
        assert!(distinct_customers(&[]).is_empty());
    }
}
