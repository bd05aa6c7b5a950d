//! Update Price Log Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricebook_app::domain::price_logs::data::PriceLogUpdate;

use crate::{
    extensions::*,
    price_logs::{errors::into_status_error, get::PriceLogResponse},
    state::State,
};

use super::{parse_date, parse_tax_rate};

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePriceLogRequest {
    pub product: Option<String>,
    pub distributor: Option<String>,

    /// Price in cents
    pub price: Option<u64>,

    /// One of `5.5%`, `20%`, `No tax`
    pub tax_rate: Option<String>,

    /// Observation date, `YYYY-MM-DD`
    pub date: Option<String>,

    pub quantity: Option<u32>,

    /// Clears the stored quantity; cannot be sent together with `quantity`
    #[serde(default)]
    pub clear_quantity: bool,

    /// A blank comment clears the stored one
    pub comment: Option<String>,
}

impl UpdatePriceLogRequest {
    pub(crate) fn into_update(self) -> Result<PriceLogUpdate, StatusError> {
        Ok(PriceLogUpdate {
            product: self.product,
            distributor: self.distributor,
            price: self.price,
            tax_rate: self.tax_rate.as_deref().map(parse_tax_rate).transpose()?,
            date: self.date.as_deref().map(parse_date).transpose()?,
            quantity: self.quantity,
            clear_quantity: self.clear_quantity,
            comment: self.comment,
        })
    }
}

/// Price Log Update Handler
#[endpoint(
    tags("price-logs"),
    summary = "Update Price Log",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Price log updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Price log not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Role cannot manage price logs"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "price_logs.update",
    skip(id, json, depot),
    fields(price_log_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdatePriceLogRequest>,
    depot: &mut Depot,
) -> Result<Json<PriceLogResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let uuid = id.into_inner();

    tracing::Span::current().record("price_log_uuid", tracing::field::display(uuid));

    let update = json.into_inner().into_update()?;

    let price_log = state
        .app
        .price_logs
        .update_price_log(uuid.into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(price_log.into()))
}
