//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    auth::{AccessKeys, AuthService, StaticAuthService},
    database::{self, Db},
    domain::{
        exports::{ExportService, PriceLogsExportService},
        price_logs::{PgPriceLogsService, PriceLogsService},
        registry::{PgRegistryService, RegistryService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Settings needed to build the service graph.
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub name_cache_ttl: Duration,
    pub access_keys: AccessKeys,
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub registry: Arc<dyn RegistryService>,
    pub price_logs: Arc<dyn PriceLogsService>,
    pub exports: Arc<dyn ExportService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let AppConfig {
            database_url,
            name_cache_ttl,
            access_keys,
            run_migrations,
        } = config;

        let pool = database::connect(&database_url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::from_db(Db::new(pool), name_cache_ttl, access_keys))
    }

    /// Wire every service on top of an existing pool.
    #[must_use]
    pub fn from_db(db: Db, name_cache_ttl: Duration, access_keys: AccessKeys) -> Self {
        let price_logs: Arc<dyn PriceLogsService> = Arc::new(PgPriceLogsService::new(db.clone()));

        Self {
            registry: Arc::new(PgRegistryService::new(db, name_cache_ttl)),
            exports: Arc::new(PriceLogsExportService::new(Arc::clone(&price_logs))),
            price_logs,
            auth: Arc::new(StaticAuthService::new(access_keys)),
        }
    }
}
