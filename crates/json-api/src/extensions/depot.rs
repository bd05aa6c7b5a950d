//! Depot helper extensions.

use std::any::Any;

use pricebook_app::auth::Role;
use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_role(&mut self, role: Role);

    fn role(&self) -> Option<Role>;

    fn role_or_401(&self) -> Result<Role, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_role(&mut self, role: Role) {
        self.inject(role);
    }

    fn role(&self) -> Option<Role> {
        self.obtain::<Role>().ok().copied()
    }

    fn role_or_401(&self) -> Result<Role, StatusError> {
        self.role().ok_or_else(StatusError::unauthorized)
    }
}
