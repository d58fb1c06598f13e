use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::debug;

// ── DateParser ────────────────────────────────────────────────────────────────

/// Parses order dates from the variety of raw cell values found in workbook
/// sheets.
pub struct DateParser;

impl DateParser {
    /// Attempt to parse a raw cell value into a calendar date.
    ///
    /// Handles:
    /// * `null`       → `None`
    /// * JSON string  → day-before-month patterns (`05/01/2024` is
    ///   January 5th), ISO dates, and common date-time forms.
    /// * JSON number  → Excel serial day count (epoch 1899-12-30).
    ///
    /// Returns `None` for anything unparseable; the caller keeps the row.
    pub fn parse(value: &Value) -> Option<NaiveDate> {
        match value {
            Value::Null => None,
            Value::String(s) => Self::parse_str(s.trim()),
            Value::Number(n) => n.as_f64().and_then(Self::from_excel_serial),
            _ => None,
        }
    }

    fn parse_str(s: &str) -> Option<NaiveDate> {
        if s.is_empty() {
            return None;
        }

        // Day-first patterns are tried before ISO so that "05/01/2024"
        // resolves to January 5th, not May 1st. The two-digit %y form must
        // precede %Y, which would otherwise swallow "24" as the year 24.
        const DATE_FORMATS: &[&str] = &[
            "%d/%m/%y",
            "%d/%m/%Y",
            "%d-%m-%Y",
            "%d.%m.%Y",
            "%Y-%m-%d",
        ];

        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Some(date);
            }
        }

        const DATETIME_FORMATS: &[&str] = &[
            "%d/%m/%Y %H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M:%S%.f",
        ];

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.date());
            }
        }

        debug!("DateParser: could not parse date string \"{}\"", s);
        None
    }

    /// Convert an Excel serial day count to a date.
    ///
    /// Excel stores dates as days since 1899-12-30; fractional parts carry
    /// the time of day and are dropped.
    fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
        if !serial.is_finite() || serial < 1.0 {
            return None;
        }
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
        epoch.checked_add_days(chrono::Days::new(serial.trunc() as u64))
    }
}

// ── QuantityParser ────────────────────────────────────────────────────────────

/// Coerces raw quantity cells to finite numbers.
pub struct QuantityParser;

impl QuantityParser {
    /// Attempt to parse a raw cell value into a finite quantity.
    ///
    /// Numbers pass through when finite. Strings are trimmed, thousands
    /// separators stripped, then parsed. Everything else (booleans, nulls,
    /// nested values) is `None`: the row is excluded, never coerced to
    /// zero.
    pub fn parse(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
            Value::String(s) => {
                let cleaned = s.trim().replace(',', "");
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
            }
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
