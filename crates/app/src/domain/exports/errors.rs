//! Export service errors.

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

use crate::domain::price_logs::PriceLogsServiceError;

#[derive(Debug, Error)]
pub enum ExportServiceError {
    #[error("failed to load price logs")]
    PriceLogs(#[from] PriceLogsServiceError),

    #[error("failed to write workbook")]
    Workbook(#[from] XlsxError),

    #[error("too many rows for a single worksheet")]
    TooManyRows,
}
