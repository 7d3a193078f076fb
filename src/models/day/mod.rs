// Day module
// Per-day override configuration and the derived day cell handed to
// the rendering host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Host-supplied override for a single date.
///
/// An explicit `disabled` flag takes absolute priority over the range,
/// weekday and slot eligibility rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayConfig {
    pub date: NaiveDate,
    pub marked: bool,
    pub disabled: Option<bool>,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub css_class: Option<String>,
}

impl DayConfig {
    /// Create an override for a date with all fields unset.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            marked: false,
            disabled: None,
            title: None,
            sub_title: None,
            css_class: None,
        }
    }
}

impl Default for DayConfig {
    fn default() -> Self {
        Self::new(NaiveDate::default())
    }
}

/// A single grid cell. Derived data: recomputed on every grid build,
/// never stored across configuration changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Midnight-normalized calendar date of the cell.
    pub date: NaiveDate,
    pub title: String,
    pub sub_title: String,
    pub css_class: String,
    pub is_today: bool,
    pub marked: bool,
    pub disabled: bool,
    /// First day of its month.
    pub is_first: bool,
    /// Last day of its month.
    pub is_last: bool,
    /// Cell padded in from the month before the grid's month.
    pub is_prev_month: bool,
    /// Cell padded in from the month after the grid's month.
    pub is_next_month: bool,
}
