//! Price Log Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pricebook_app::domain::price_logs::data::PriceLogFilter;

use crate::{
    extensions::*,
    price_logs::{errors::into_status_error, get::PriceLogResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceLogsResponse {
    /// Matching price logs, newest first
    pub price_logs: Vec<PriceLogResponse>,
}

/// Build a filter from the shared `product`/`distributor`/`from`/`to` query.
pub(crate) fn filter_from_query(
    product: QueryParam<String, false>,
    distributor: QueryParam<String, false>,
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
) -> Result<PriceLogFilter, StatusError> {
    Ok(PriceLogFilter {
        product: product.into_inner().filter(|value| !value.trim().is_empty()),
        distributor: distributor
            .into_inner()
            .filter(|value| !value.trim().is_empty()),
        from: from.into_date("from")?,
        to: to.into_date("to")?,
    })
}

/// Price Log Index Handler
///
/// Returns price logs, optionally filtered by product, distributor and date range.
#[endpoint(
    tags("price-logs"),
    summary = "List Price Logs",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    product: QueryParam<String, false>,
    distributor: QueryParam<String, false>,
    from: QueryParam<String, false>,
    to: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<PriceLogsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let filter = filter_from_query(product, distributor, from, to)?;

    let price_logs = state
        .app
        .price_logs
        .list_price_logs(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(PriceLogsResponse {
        price_logs: price_logs.into_iter().map(Into::into).collect(),
    }))
}
