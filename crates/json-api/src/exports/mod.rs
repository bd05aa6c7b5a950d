//! Spreadsheet Exports

pub(crate) mod errors;
pub(crate) mod price_logs;
