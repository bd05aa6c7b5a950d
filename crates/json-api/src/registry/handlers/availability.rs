//! Name Availability Handlers

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pricebook_app::domain::registry::{RegistryKind, data::NameAvailability};

use crate::{extensions::*, registry::errors::into_status_error, state::State};

/// Live availability check result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AvailabilityResponse {
    /// Name as typed
    pub name: String,

    /// Name as it would be stored
    pub normalised: String,

    /// Whether the name can be registered
    pub available: bool,
}

impl From<NameAvailability> for AvailabilityResponse {
    fn from(availability: NameAvailability) -> Self {
        Self {
            name: availability.name,
            normalised: availability.normalised,
            available: availability.available,
        }
    }
}

async fn check(
    name: QueryParam<String, true>,
    depot: &mut Depot,
    kind: RegistryKind,
) -> Result<Json<AvailabilityResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let availability = state
        .app
        .registry
        .check_availability(kind, name.into_inner())
        .await
        .map_err(|error| into_status_error(kind, error))?;

    Ok(Json(availability.into()))
}

/// Product Name Availability Handler
#[endpoint(
    tags("registry"),
    summary = "Check Product Name",
    security(("bearer_auth" = []))
)]
pub(crate) async fn products(
    name: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<AvailabilityResponse>, StatusError> {
    check(name, depot, RegistryKind::Products).await
}

/// Distributor Name Availability Handler
#[endpoint(
    tags("registry"),
    summary = "Check Distributor Name",
    security(("bearer_auth" = []))
)]
pub(crate) async fn distributors(
    name: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<AvailabilityResponse>, StatusError> {
    check(name, depot, RegistryKind::Distributors).await
}
