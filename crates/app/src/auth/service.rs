//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{AccessKeys, AuthServiceError, Role, keys::keys_match};

/// Resolves access keys against the two configured keys.
#[derive(Debug)]
pub struct StaticAuthService {
    keys: AccessKeys,
}

impl StaticAuthService {
    #[must_use]
    pub fn new(keys: AccessKeys) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl AuthService for StaticAuthService {
    async fn authenticate(&self, access_key: &str) -> Result<Role, AuthServiceError> {
        if access_key.is_empty() {
            return Err(AuthServiceError::InvalidAccessKey);
        }

        if keys_match(access_key, self.keys.admin()) {
            return Ok(Role::Admin);
        }

        if keys_match(access_key, self.keys.viewer()) {
            return Ok(Role::Viewer);
        }

        Err(AuthServiceError::InvalidAccessKey)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate(&self, access_key: &str) -> Result<Role, AuthServiceError>;
}
