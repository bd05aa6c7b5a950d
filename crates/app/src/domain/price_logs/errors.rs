//! Price log service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceLogsServiceError {
    #[error("price log already exists")]
    AlreadyExists,

    #[error("price log not found")]
    NotFound,

    #[error("product or distributor is not registered")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("value out of storable range")]
    OutOfRange(#[from] TryFromIntError),
}

impl From<Error> for PriceLogsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = PriceLogsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, PriceLogsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn oversized_price_is_out_of_range() {
        let error = PriceLogsServiceError::from(i64::try_from(u64::MAX).unwrap_err());

        assert!(
            matches!(error, PriceLogsServiceError::OutOfRange(_)),
            "expected OutOfRange, got {error:?}"
        );
    }
}
