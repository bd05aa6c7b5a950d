//! Export service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::domain::{
    exports::{errors::ExportServiceError, workbook::write_price_logs_workbook},
    price_logs::{PriceLogsService, data::PriceLogFilter},
};

/// File name offered for the price log download.
pub const PRICE_LOGS_FILE_NAME: &str = "price_logs.xlsx";

/// A rendered spreadsheet ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Export {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

#[derive(Clone)]
pub struct PriceLogsExportService {
    price_logs: Arc<dyn PriceLogsService>,
}

impl PriceLogsExportService {
    #[must_use]
    pub fn new(price_logs: Arc<dyn PriceLogsService>) -> Self {
        Self { price_logs }
    }
}

#[async_trait]
impl ExportService for PriceLogsExportService {
    async fn export_price_logs(&self, filter: PriceLogFilter) -> Result<Export, ExportServiceError> {
        let rows = self.price_logs.list_price_logs(filter).await?;

        let bytes = write_price_logs_workbook(&rows)?;

        info!(rows = rows.len(), bytes = bytes.len(), "exported price logs");

        Ok(Export {
            file_name: PRICE_LOGS_FILE_NAME.to_string(),
            bytes,
            row_count: rows.len(),
        })
    }
}

#[automock]
#[async_trait]
pub trait ExportService: Send + Sync {
    /// Renders the filtered price logs as an `.xlsx` workbook.
    async fn export_price_logs(&self, filter: PriceLogFilter) -> Result<Export, ExportServiceError>;
}
