// Result module
// Normalized date records and the external result/value shapes
// exchanged with the host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::options::DateRange;

/// A selected day normalized for the host: the calendar date, its
/// local-midnight epoch equivalents, a formatted string, and the
/// decomposed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRecord {
    pub date: NaiveDate,
    /// Epoch milliseconds of local midnight.
    pub time: i64,
    /// Epoch seconds of local midnight.
    pub unix: i64,
    /// Date formatted with the configured pattern.
    pub formatted: String,
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub day: u32,
}

/// Final result shape per pick mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarResult {
    Single(DateRecord),
    Range { from: DateRecord, to: DateRecord },
    Multi(Vec<DateRecord>),
}

/// External value accepted and produced by the picker's value
/// accessor, mirroring the result shape without the derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalendarValue {
    Date(NaiveDate),
    Range(DateRange),
    Dates(Vec<NaiveDate>),
}
