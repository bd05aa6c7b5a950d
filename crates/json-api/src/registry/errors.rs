//! Registry Errors

use salvo::http::StatusError;
use tracing::error;

use pricebook_app::domain::registry::{RegistryKind, RegistryServiceError};

pub(crate) fn into_status_error(kind: RegistryKind, error: RegistryServiceError) -> StatusError {
    match error {
        RegistryServiceError::AlreadyExists => {
            StatusError::conflict().brief(format!("{} already registered", kind.label()))
        }
        RegistryServiceError::MissingRequiredData => {
            StatusError::bad_request().brief(format!("{} name is required", kind.label()))
        }
        RegistryServiceError::InvalidData => {
            StatusError::bad_request().brief(format!("Invalid {} name", kind.label()))
        }
        RegistryServiceError::NotFound => StatusError::not_found(),
        RegistryServiceError::Sql(source) => {
            error!(%kind, "registry storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn duplicates_are_conflicts() {
        let status = into_status_error(RegistryKind::Products, RegistryServiceError::AlreadyExists);

        assert_eq!(status.code, StatusCode::CONFLICT);
    }

    #[test]
    fn blank_and_invalid_names_are_bad_requests() {
        for error in [
            RegistryServiceError::MissingRequiredData,
            RegistryServiceError::InvalidData,
        ] {
            let status = into_status_error(RegistryKind::Distributors, error);

            assert_eq!(status.code, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let status = into_status_error(
            RegistryKind::Products,
            RegistryServiceError::Sql(sqlx::Error::PoolTimedOut),
        );

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
