//! Spreadsheet exports

pub mod errors;
pub mod service;
pub mod workbook;

pub use errors::ExportServiceError;
pub use service::*;
