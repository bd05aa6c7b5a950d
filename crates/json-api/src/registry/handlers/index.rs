//! Registry Index Handlers

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pricebook_app::domain::registry::RegistryKind;

use crate::{extensions::*, registry::errors::into_status_error, state::State};

/// Registered names, sorted ascending
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NamesResponse {
    /// Normalised names
    pub names: Vec<String>,
}

async fn list(depot: &mut Depot, kind: RegistryKind) -> Result<Json<NamesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let names = state
        .app
        .registry
        .list_names(kind)
        .await
        .map_err(|error| into_status_error(kind, error))?;

    Ok(Json(NamesResponse { names }))
}

/// List Products
///
/// Returns every registered product name.
#[endpoint(
    tags("registry"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn products(depot: &mut Depot) -> Result<Json<NamesResponse>, StatusError> {
    list(depot, RegistryKind::Products).await
}

/// List Distributors
///
/// Returns every registered distributor name.
#[endpoint(
    tags("registry"),
    summary = "List Distributors",
    security(("bearer_auth" = []))
)]
pub(crate) async fn distributors(depot: &mut Depot) -> Result<Json<NamesResponse>, StatusError> {
    list(depot, RegistryKind::Distributors).await
}
