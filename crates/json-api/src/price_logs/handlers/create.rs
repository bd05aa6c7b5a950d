//! Create Price Log Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pricebook_app::domain::price_logs::{
    data::NewPriceLog,
    records::{PriceLogUuid, TaxRate},
};

use crate::{
    extensions::*,
    price_logs::{errors::into_status_error, get::PriceLogResponse},
    state::State,
};

use super::{parse_date, parse_tax_rate};

/// Create Price Log Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePriceLogRequest {
    /// Optional client-chosen id; generated when omitted
    pub id: Option<Uuid>,

    pub product: String,
    pub distributor: String,

    /// Price in cents
    pub price: u64,

    /// One of `5.5%`, `20%`, `No tax`; defaults to `No tax`
    pub tax_rate: Option<String>,

    /// Observation date, `YYYY-MM-DD`
    pub date: String,

    pub quantity: Option<u32>,
    pub comment: Option<String>,
}

impl CreatePriceLogRequest {
    fn into_new_price_log(self) -> Result<NewPriceLog, StatusError> {
        let tax_rate = match self.tax_rate.as_deref() {
            Some(value) => parse_tax_rate(value)?,
            None => TaxRate::default(),
        };

        Ok(NewPriceLog {
            uuid: self.id.map_or_else(PriceLogUuid::new, PriceLogUuid::from),
            product: self.product,
            distributor: self.distributor,
            price: self.price,
            tax_rate,
            date: parse_date(&self.date)?,
            quantity: self.quantity,
            comment: self.comment,
        })
    }
}

/// Create Price Log Handler
#[endpoint(
    tags("price-logs"),
    summary = "Create Price Log",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Price log created"),
        (status_code = StatusCode::CONFLICT, description = "Price log already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Role cannot enter prices"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePriceLogRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PriceLogResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let new = json.into_inner().into_new_price_log()?;

    let price_log = state
        .app
        .price_logs
        .create_price_log(new)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/price-logs/{}", price_log.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(price_log.into()))
}
