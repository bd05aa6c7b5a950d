//! Best Price Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pricebook_app::{domain::price_logs::best_price::BestPrice, money::minor_to_decimal};

use crate::{
    extensions::*,
    price_logs::{errors::into_status_error, get::PriceLogResponse},
    state::State,
};

/// Best price card for a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BestPriceResponse {
    pub product: String,

    /// Lowest logged price in cents
    pub price: u64,

    /// Lowest logged price in major units
    pub price_display: String,

    /// Every distributor logged at the lowest price
    pub distributors: Vec<String>,

    /// Full price history for the product, newest first
    pub history: Vec<PriceLogResponse>,
}

impl From<BestPrice> for BestPriceResponse {
    fn from(best: BestPrice) -> Self {
        Self {
            product: best.product,
            price: best.price,
            price_display: minor_to_decimal(best.price).to_string(),
            distributors: best.distributors.into_vec(),
            history: best.history.into_iter().map(Into::into).collect(),
        }
    }
}

/// Best Price Handler
///
/// Returns the lowest price logged for a product and who offered it.
#[endpoint(
    tags("analysis"),
    summary = "Best Price",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Best price found"),
        (status_code = StatusCode::NOT_FOUND, description = "No price logged for the product"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    product: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<BestPriceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let best = state
        .app
        .price_logs
        .best_price(product.into_inner())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("No price logged for this product"))?;

    Ok(Json(best.into()))
}
