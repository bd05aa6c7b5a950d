//! Disposable test databases inside one shared `PostgreSQL` container.

use sqlx::{Connection, PgConnection, PgPool, migrate::MigrateError, query};
use testcontainers::{ContainerAsync, TestcontainersError, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use thiserror::Error;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::database;

const USER: &str = "pricebook_test";
const PASSWORD: &str = "pricebook_test_password";

#[derive(Debug, Error)]
pub(crate) enum TestDbError {
    #[error("failed to start postgres container")]
    Container(#[from] TestcontainersError),

    #[error("failed to prepare test database")]
    Sql(#[from] sqlx::Error),

    #[error("failed to migrate test database")]
    Migrate(#[from] MigrateError),
}

/// The container outlives every test in the binary; only its address is reused.
struct PostgresServer {
    _container: ContainerAsync<PostgresImage>,
    base_url: String,
}

static SERVER: OnceCell<PostgresServer> = OnceCell::const_new();

async fn start_server() -> Result<PostgresServer, TestDbError> {
    let container = PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name("pricebook_test")
        .start()
        .await?;

    let host = container.get_host().await?;
    let port = container.get_host_port_ipv4(5432).await?;

    Ok(PostgresServer {
        _container: container,
        base_url: format!("postgres://{USER}:{PASSWORD}@{host}:{port}"),
    })
}

/// A freshly migrated database owned by a single test.
///
/// Services commit their own transactions, so isolation comes from every test
/// getting its own database rather than from rollback.
#[derive(Debug, Clone)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub(crate) async fn new() -> Result<Self, TestDbError> {
        let server = SERVER.get_or_try_init(start_server).await?;

        // A v7 uuid in simple form is a valid unquoted identifier suffix.
        let name = format!("pricebook_test_{}", Uuid::now_v7().simple());

        let mut admin = PgConnection::connect(&format!("{}/postgres", server.base_url)).await?;

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await?;

        admin.close().await?;

        let pool = database::connect(&format!("{}/{name}", server.base_url)).await?;

        database::migrate(&pool).await?;

        Ok(Self { pool, name })
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn each_test_database_is_migrated_and_distinct() -> TestResult {
        let first = TestDb::new().await?;
        let second = TestDb::new().await?;

        assert_ne!(first.name(), second.name());

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('products', 'distributors', 'price_logs')",
        )
        .fetch_one(first.pool())
        .await?;

        assert_eq!(tables, 3, "migrations should create all three tables");

        Ok(())
    }
}
