//! Registry Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::registry::records::{RegisteredName, RegistryKind};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const LIST_DISTRIBUTORS_SQL: &str = include_str!("sql/list_distributors.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const CREATE_DISTRIBUTOR_SQL: &str = include_str!("sql/create_distributor.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRegistryRepository;

impl PgRegistryRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_names(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        kind: RegistryKind,
    ) -> Result<Vec<RegisteredName>, sqlx::Error> {
        let sql = match kind {
            RegistryKind::Products => LIST_PRODUCTS_SQL,
            RegistryKind::Distributors => LIST_DISTRIBUTORS_SQL,
        };

        query_as::<Postgres, RegisteredName>(sql)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        kind: RegistryKind,
        name: &str,
    ) -> Result<RegisteredName, sqlx::Error> {
        let sql = match kind {
            RegistryKind::Products => CREATE_PRODUCT_SQL,
            RegistryKind::Distributors => CREATE_DISTRIBUTOR_SQL,
        };

        query_as::<Postgres, RegisteredName>(sql)
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for RegisteredName {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
