//! Price Log Errors

use salvo::http::StatusError;
use tracing::error;

use pricebook_app::domain::price_logs::PriceLogsServiceError;

pub(crate) fn into_status_error(error: PriceLogsServiceError) -> StatusError {
    match error {
        PriceLogsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Price log already exists")
        }
        PriceLogsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Product or distributor is not registered")
        }
        PriceLogsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Product and distributor are required")
        }
        PriceLogsServiceError::InvalidData | PriceLogsServiceError::OutOfRange(_) => {
            StatusError::bad_request().brief("Invalid price log payload")
        }
        PriceLogsServiceError::NotFound => StatusError::not_found().brief("Price log not found"),
        PriceLogsServiceError::Sql(source) => {
            error!("price log storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        let cases = [
            (PriceLogsServiceError::AlreadyExists, StatusCode::CONFLICT),
            (PriceLogsServiceError::InvalidReference, StatusCode::BAD_REQUEST),
            (PriceLogsServiceError::MissingRequiredData, StatusCode::BAD_REQUEST),
            (PriceLogsServiceError::InvalidData, StatusCode::BAD_REQUEST),
            (PriceLogsServiceError::NotFound, StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let status = into_status_error(PriceLogsServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
