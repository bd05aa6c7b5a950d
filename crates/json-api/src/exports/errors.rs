//! Export Errors

use salvo::http::StatusError;
use tracing::error;

use pricebook_app::domain::exports::ExportServiceError;

pub(crate) fn into_status_error(error: ExportServiceError) -> StatusError {
    match error {
        ExportServiceError::PriceLogs(source) => crate::price_logs::errors::into_status_error(source),
        ExportServiceError::TooManyRows => {
            StatusError::bad_request().brief("Too many rows for one sheet, narrow the filter")
        }
        ExportServiceError::Workbook(source) => {
            error!("failed to build workbook: {source}");

            StatusError::internal_server_error()
        }
    }
}
