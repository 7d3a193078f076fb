// Crate error type

use thiserror::Error;

use crate::models::options::PickMode;

/// Errors produced by the picker surface. Options resolution never
/// fails; only confirming a selection and parsing external date
/// payloads can go wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("selection is incomplete for {mode:?} pick mode")]
    IncompleteSelection { mode: PickMode },

    #[error("cannot parse {value:?} as a date with format {format:?}")]
    InvalidDate { value: String, format: String },
}
