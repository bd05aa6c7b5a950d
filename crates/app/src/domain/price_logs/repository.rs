//! Price Logs Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::price_logs::{
    data::{NewPriceLog, PriceLogFilter, PriceLogUpdate},
    records::{PriceLogRecord, PriceLogUuid, TaxRate},
};

const LIST_PRICE_LOGS_SQL: &str = include_str!("sql/list_price_logs.sql");
const GET_PRICE_LOG_SQL: &str = include_str!("sql/get_price_log.sql");
const CREATE_PRICE_LOG_SQL: &str = include_str!("sql/create_price_log.sql");
const UPDATE_PRICE_LOG_SQL: &str = include_str!("sql/update_price_log.sql");
const DELETE_PRICE_LOG_SQL: &str = include_str!("sql/delete_price_log.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPriceLogsRepository;

impl PgPriceLogsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_price_logs(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: &PriceLogFilter,
    ) -> Result<Vec<PriceLogRecord>, sqlx::Error> {
        query_as::<Postgres, PriceLogRecord>(LIST_PRICE_LOGS_SQL)
            .bind(filter.product.as_deref())
            .bind(filter.distributor.as_deref())
            .bind(filter.from.map(SqlxDate::from))
            .bind(filter.to.map(SqlxDate::from))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_price_log(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        price_log: PriceLogUuid,
    ) -> Result<PriceLogRecord, sqlx::Error> {
        query_as::<Postgres, PriceLogRecord>(GET_PRICE_LOG_SQL)
            .bind(price_log.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_price_log(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        price_log: &NewPriceLog,
    ) -> Result<PriceLogRecord, sqlx::Error> {
        query_as::<Postgres, PriceLogRecord>(CREATE_PRICE_LOG_SQL)
            .bind(price_log.uuid.into_uuid())
            .bind(&price_log.product)
            .bind(&price_log.distributor)
            .bind(price_to_i64(price_log.price)?)
            .bind(price_log.tax_rate.as_str())
            .bind(SqlxDate::from(price_log.date))
            .bind(price_log.quantity.map(quantity_to_i32).transpose()?)
            .bind(price_log.comment.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_price_log(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        price_log: PriceLogUuid,
        update: &PriceLogUpdate,
    ) -> Result<PriceLogRecord, sqlx::Error> {
        query_as::<Postgres, PriceLogRecord>(UPDATE_PRICE_LOG_SQL)
            .bind(price_log.into_uuid())
            .bind(update.product.as_deref())
            .bind(update.distributor.as_deref())
            .bind(update.price.map(price_to_i64).transpose()?)
            .bind(update.tax_rate.map(TaxRate::as_str))
            .bind(update.date.map(SqlxDate::from))
            .bind(update.quantity.map(quantity_to_i32).transpose()?)
            .bind(update.clear_quantity)
            .bind(update.comment.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_price_log(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        price_log: PriceLogUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRICE_LOG_SQL)
            .bind(price_log.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn price_to_i64(price: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(price).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn quantity_to_i32(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

impl<'r> FromRow<'r, PgRow> for PriceLogRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        let quantity = row
            .try_get::<Option<i32>, _>("quantity")?
            .map(u32::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "quantity".to_string(),
                source: Box::new(e),
            })?;

        let tax_rate = row
            .try_get::<String, _>("tax_rate")?
            .parse::<TaxRate>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "tax_rate".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: PriceLogUuid::from_uuid(row.try_get("uuid")?),
            product: row.try_get("product")?,
            distributor: row.try_get("distributor")?,
            price,
            tax_rate,
            date: row.try_get::<SqlxDate, _>("date")?.to_jiff(),
            quantity,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
