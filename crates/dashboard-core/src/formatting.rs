/// Format a quantity with thousands separators and a fixed number of
/// decimal places.
///
/// # Examples
///
/// ```
/// use dashboard_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.*}", decimals, value.abs());

    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };

    let mut result = group_thousands(int_part);
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Format a mean for display: two decimal places, or `"n/a"` when the mean
/// is undefined (empty dataset).
///
/// # Examples
///
/// ```
/// use dashboard_core::formatting::format_mean;
///
/// assert_eq!(format_mean(7.5), "7.50");
/// assert_eq!(format_mean(f64::NAN), "n/a");
/// ```
pub fn format_mean(mean: f64) -> String {
    if mean.is_nan() {
        "n/a".to_string()
    } else {
        format_number(mean, 2)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ── Tests ─────────────────────────────────────────────────────────────────────
