//! Server configuration module

use std::time::Duration;

use clap::Parser;

use pricebook_app::{auth::AccessKeys, context::AppConfig};

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Pricebook JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "pricebook-json", about = "Pricebook JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Access key settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()?.validated()
    }

    fn validated(self) -> Result<Self, clap::Error> {
        self.auth.validate()?;

        Ok(self)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Split out the settings the application context needs.
    pub fn into_app_config(self) -> AppConfig {
        AppConfig {
            database_url: self.database.database_url,
            name_cache_ttl: Duration::from_secs(self.database.name_cache_ttl_seconds),
            access_keys: AccessKeys::new(self.auth.admin_access_key, self.auth.viewer_access_key),
            run_migrations: self.database.run_migrations,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 7] = [
        "pricebook-json",
        "--database-url",
        "postgres://localhost/pricebook",
        "--admin-access-key",
        "admin-key",
        "--viewer-access-key",
        "viewer-key",
    ];

    #[test]
    fn defaults_apply_when_only_required_settings_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.database.name_cache_ttl_seconds, 600);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(matches!(config.logging.log_format, LogFormat::Compact));

        let app = config.into_app_config();

        assert_eq!(app.name_cache_ttl, Duration::from_secs(600));
        assert!(!app.run_migrations, "migrations are opt-in");

        Ok(())
    }

    #[test]
    fn distinct_access_keys_pass_validation() -> TestResult {
        ServerConfig::try_parse_from(REQUIRED)?.validated()?;

        Ok(())
    }

    #[test]
    fn identical_access_keys_are_rejected() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "pricebook-json",
            "--database-url",
            "postgres://localhost/pricebook",
            "--admin-access-key",
            "shared-key",
            "--viewer-access-key",
            "shared-key",
        ])?;

        let result = config.validated();

        assert!(
            result.is_err_and(|error| error.kind() == ErrorKind::ArgumentConflict),
            "a shared key would silently resolve viewers to admin"
        );

        Ok(())
    }

    #[test]
    fn empty_access_key_is_rejected() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "pricebook-json",
            "--database-url",
            "postgres://localhost/pricebook",
            "--admin-access-key",
            "admin-key",
            "--viewer-access-key",
            "",
        ])?;

        assert!(config.validated().is_err(), "an empty viewer key must be rejected");

        Ok(())
    }

    #[test]
    fn missing_access_keys_are_rejected() {
        let result = ServerConfig::try_parse_from([
            "pricebook-json",
            "--database-url",
            "postgres://localhost/pricebook",
        ]);

        assert!(result.is_err(), "access keys are required");
    }
}
