//! Services wired to a disposable database.

use crate::{
    database::Db,
    domain::{
        price_logs::PgPriceLogsService,
        registry::{DEFAULT_NAME_CACHE_TTL, PgRegistryService},
    },
};

use super::db::{TestDb, TestDbError};

pub(crate) struct TestContext {
    pub db: TestDb,
    pub registry: PgRegistryService,
    pub price_logs: PgPriceLogsService,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestDbError> {
        let test_db = TestDb::new().await?;
        let db = Db::new(test_db.pool().clone());

        Ok(Self {
            registry: PgRegistryService::new(db.clone(), DEFAULT_NAME_CACHE_TTL),
            price_logs: PgPriceLogsService::new(db),
            db: test_db,
        })
    }

    /// A registry service with its own name cache, like a second server process.
    pub(crate) fn second_registry(&self) -> PgRegistryService {
        PgRegistryService::new(Db::new(self.db.pool().clone()), DEFAULT_NAME_CACHE_TTL)
    }
}
