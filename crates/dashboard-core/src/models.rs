use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized order row read from a workbook sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order date, or `None` when the raw cell could not be parsed.
    pub date: Option<NaiveDate>,
    /// Label of the sheet this row came from (e.g. a month name).
    pub period: String,
    /// Customer the order belongs to.
    pub customer: String,
    /// Ordered item code.
    pub item: String,
    /// Ordered quantity. Always finite; rows with a non-numeric quantity
    /// cell never become records.
    pub quantity: f64,
}

/// The result of normalizing one sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedSheet {
    /// The sheet's name, stamped onto every record as its period.
    pub period: String,
    /// Normalized rows in sheet order.
    #[serde(default)]
    pub records: Vec<OrderRecord>,
    /// Rows dropped because their quantity cell was not numeric.
    #[serde(default)]
    pub rejected_rows: u32,
}

impl NormalizedSheet {
    /// Number of records produced from this sheet.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the sheet produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
