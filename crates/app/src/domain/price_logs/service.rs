//! Price logs service.

use std::collections::HashSet;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        price_logs::{
            best_price::{BestPrice, best_price_of},
            data::{
                CommitSummary, NewPriceLog, PriceLogCommit, PriceLogEdit, PriceLogFilter,
                PriceLogUpdate,
            },
            errors::PriceLogsServiceError,
            records::{PriceLogRecord, PriceLogUuid},
            repository::PgPriceLogsRepository,
        },
        registry::names::normalise_name,
    },
};

#[derive(Debug, Clone)]
pub struct PgPriceLogsService {
    db: Db,
    repository: PgPriceLogsRepository,
}

impl PgPriceLogsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPriceLogsRepository::new(),
        }
    }
}

/// Validate every edit up front and collapse the change set to one operation per row.
///
/// Repeated deletions of a row count once. Later edits of a row replace earlier ones, and
/// edits to rows that are also being deleted are dropped.
fn prepare_commit(commit: PriceLogCommit) -> Result<PriceLogCommit, PriceLogsServiceError> {
    let PriceLogCommit { edits, deletions } = commit;

    let mut deleted = HashSet::with_capacity(deletions.len());
    let deletions: Vec<PriceLogUuid> = deletions
        .into_iter()
        .filter(|uuid| deleted.insert(*uuid))
        .collect();

    let mut latest: Vec<PriceLogEdit> = Vec::with_capacity(edits.len());

    for edit in edits {
        if edit.update.is_empty() || deleted.contains(&edit.uuid) {
            continue;
        }

        match latest.iter_mut().find(|kept| kept.uuid == edit.uuid) {
            Some(kept) => *kept = edit,
            None => latest.push(edit),
        }
    }

    let edits = latest
        .into_iter()
        .map(|edit| -> Result<PriceLogEdit, PriceLogsServiceError> {
            Ok(PriceLogEdit {
                uuid: edit.uuid,
                update: edit.update.validated()?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PriceLogCommit { edits, deletions })
}

#[async_trait]
impl PriceLogsService for PgPriceLogsService {
    async fn list_price_logs(
        &self,
        filter: PriceLogFilter,
    ) -> Result<Vec<PriceLogRecord>, PriceLogsServiceError> {
        let filter = filter.validated()?;

        let mut tx = self.db.begin().await?;

        let price_logs = self.repository.list_price_logs(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(price_logs)
    }

    async fn get_price_log(
        &self,
        price_log: PriceLogUuid,
    ) -> Result<PriceLogRecord, PriceLogsServiceError> {
        let mut tx = self.db.begin().await?;

        let price_log = self.repository.get_price_log(&mut tx, price_log).await?;

        tx.commit().await?;

        Ok(price_log)
    }

    async fn create_price_log(
        &self,
        price_log: NewPriceLog,
    ) -> Result<PriceLogRecord, PriceLogsServiceError> {
        let price_log = price_log.validated()?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_price_log(&mut tx, &price_log).await?;

        tx.commit().await?;

        info!(
            price_log_uuid = %created.uuid,
            product = %created.product,
            distributor = %created.distributor,
            price = created.price,
            "logged price"
        );

        Ok(created)
    }

    async fn update_price_log(
        &self,
        price_log: PriceLogUuid,
        update: PriceLogUpdate,
    ) -> Result<PriceLogRecord, PriceLogsServiceError> {
        let update = update.validated()?;

        let mut tx = self.db.begin().await?;

        let updated = if update.is_empty() {
            self.repository.get_price_log(&mut tx, price_log).await?
        } else {
            self.repository
                .update_price_log(&mut tx, price_log, &update)
                .await?
        };

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_price_log(&self, price_log: PriceLogUuid) -> Result<(), PriceLogsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_price_log(&mut tx, price_log).await?;

        if rows_affected == 0 {
            return Err(PriceLogsServiceError::NotFound);
        }

        tx.commit().await?;

        info!(price_log_uuid = %price_log, "deleted price log");

        Ok(())
    }

    async fn commit_changes(
        &self,
        commit: PriceLogCommit,
    ) -> Result<CommitSummary, PriceLogsServiceError> {
        let commit = prepare_commit(commit)?;

        let mut tx = self.db.begin().await?;
        let mut summary = CommitSummary::default();

        for edit in &commit.edits {
            self.repository
                .update_price_log(&mut tx, edit.uuid, &edit.update)
                .await?;

            summary.updated += 1;
        }

        for price_log in &commit.deletions {
            // Dropping the transaction on error rolls back every earlier row.
            if self.repository.delete_price_log(&mut tx, *price_log).await? == 0 {
                return Err(PriceLogsServiceError::NotFound);
            }

            summary.deleted += 1;
        }

        tx.commit().await?;

        info!(
            updated = summary.updated,
            deleted = summary.deleted,
            "committed price log changes"
        );

        Ok(summary)
    }

    async fn best_price(&self, product: String) -> Result<Option<BestPrice>, PriceLogsServiceError> {
        let product = normalise_name(&product);

        if product.is_empty() {
            return Err(PriceLogsServiceError::MissingRequiredData);
        }

        let rows = self
            .list_price_logs(PriceLogFilter::for_product(product.clone()))
            .await?;

        Ok(best_price_of(&product, rows))
    }
}

#[automock]
#[async_trait]
pub trait PriceLogsService: Send + Sync {
    /// Lists price logs matching the filter, newest first.
    async fn list_price_logs(
        &self,
        filter: PriceLogFilter,
    ) -> Result<Vec<PriceLogRecord>, PriceLogsServiceError>;

    /// Retrieve a single price log.
    async fn get_price_log(
        &self,
        price_log: PriceLogUuid,
    ) -> Result<PriceLogRecord, PriceLogsServiceError>;

    /// Records a new price observation.
    async fn create_price_log(
        &self,
        price_log: NewPriceLog,
    ) -> Result<PriceLogRecord, PriceLogsServiceError>;

    /// Applies a partial update to a price log.
    async fn update_price_log(
        &self,
        price_log: PriceLogUuid,
        update: PriceLogUpdate,
    ) -> Result<PriceLogRecord, PriceLogsServiceError>;

    /// Deletes exactly the price log with the given UUID.
    async fn delete_price_log(&self, price_log: PriceLogUuid) -> Result<(), PriceLogsServiceError>;

    /// Applies a grid change set atomically.
    async fn commit_changes(
        &self,
        commit: PriceLogCommit,
    ) -> Result<CommitSummary, PriceLogsServiceError>;

    /// Lowest logged price for a product and every distributor tied at it.
    async fn best_price(&self, product: String) -> Result<Option<BestPrice>, PriceLogsServiceError>;
}
