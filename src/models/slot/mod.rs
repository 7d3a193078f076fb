// Slot module
// Named, styled date intervals used by the slots pick mode.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date;

/// A selectable interval of days. In slots mode a tap anywhere inside
/// the interval selects the whole interval, and days outside every
/// slot are ineligible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub css_class: Option<String>,
}

impl Slot {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            css_class: None,
        }
    }

    /// Inclusive membership test.
    pub fn contains(&self, day: NaiveDate) -> bool {
        date::is_within(day, self.from, self.to)
    }
}
