//! Auth Config

use clap::{Args, error::ErrorKind};

/// Access keys for the two roles.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Access key that grants the admin role
    #[arg(long, env = "ADMIN_ACCESS_KEY", hide_env_values = true)]
    pub admin_access_key: String,

    /// Access key that grants the viewer role
    #[arg(long, env = "VIEWER_ACCESS_KEY", hide_env_values = true)]
    pub viewer_access_key: String,
}

impl AuthConfig {
    /// Both keys must be set, and they must differ so a key resolves to exactly one role.
    pub(crate) fn validate(&self) -> Result<(), clap::Error> {
        if self.admin_access_key.is_empty() || self.viewer_access_key.is_empty() {
            return Err(clap::Error::raw(
                ErrorKind::ValueValidation,
                "ADMIN_ACCESS_KEY and VIEWER_ACCESS_KEY must not be empty\n",
            ));
        }

        if self.admin_access_key == self.viewer_access_key {
            return Err(clap::Error::raw(
                ErrorKind::ArgumentConflict,
                "ADMIN_ACCESS_KEY and VIEWER_ACCESS_KEY must differ\n",
            ));
        }

        Ok(())
    }
}
