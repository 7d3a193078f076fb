// Range calendar library
// Month-grid construction and date/range selection logic for calendar
// pickers; rendering stays with the host.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
