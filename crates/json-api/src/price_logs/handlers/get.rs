//! Get Price Log Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricebook_app::{domain::price_logs::records::PriceLogRecord, money::minor_to_decimal};

use crate::{extensions::*, price_logs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceLogResponse {
    /// The unique identifier of the price log
    pub id: Uuid,

    /// Registered product name
    pub product: String,

    /// Registered distributor name
    pub distributor: String,

    /// Price in cents
    pub price: u64,

    /// Price in major units, e.g. `12.99`
    pub price_display: String,

    /// One of `5.5%`, `20%`, `No tax`
    pub tax_rate: String,

    /// Observation date, `YYYY-MM-DD`
    pub date: String,

    /// Quantity bought, when recorded
    pub quantity: Option<u32>,

    /// Free-text note
    pub comment: Option<String>,

    /// The date and time the price log was created
    pub created_at: String,

    /// The date and time the price log was last updated
    pub updated_at: String,
}

impl From<PriceLogRecord> for PriceLogResponse {
    fn from(record: PriceLogRecord) -> Self {
        PriceLogResponse {
            id: record.uuid.into(),
            product: record.product,
            distributor: record.distributor,
            price: record.price,
            price_display: minor_to_decimal(record.price).to_string(),
            tax_rate: record.tax_rate.to_string(),
            date: record.date.to_string(),
            quantity: record.quantity,
            comment: record.comment,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

/// Get Price Log Handler
///
/// Returns a single price log.
#[endpoint(
    tags("price-logs"),
    summary = "Get Price Log",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Price log"),
        (status_code = StatusCode::NOT_FOUND, description = "Price log not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<PriceLogResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let price_log = state
        .app
        .price_logs
        .get_price_log(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(price_log.into()))
}
