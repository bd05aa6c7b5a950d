//! Delete Price Log Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, price_logs::errors::into_status_error, state::State};

/// Delete Price Log Handler
#[endpoint(
    tags("price-logs"),
    summary = "Delete Price Log",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Price log deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Price log not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Role cannot manage price logs"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .price_logs
        .delete_price_log(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
