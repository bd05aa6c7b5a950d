//! Registry service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryServiceError {
    #[error("name already registered")]
    AlreadyExists,

    #[error("name not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for RegistryServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = RegistryServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, RegistryServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn pool_errors_are_storage_errors() {
        let error = RegistryServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, RegistryServiceError::Sql(_)),
            "expected Sql, got {error:?}"
        );
    }
}
