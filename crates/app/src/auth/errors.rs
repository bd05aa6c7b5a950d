//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("access key is not recognised")]
    InvalidAccessKey,
}
