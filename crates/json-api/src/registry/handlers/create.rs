//! Register Name Handlers

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use pricebook_app::domain::registry::{
    RegistryKind,
    data::NewName,
    records::RegisteredName,
};

use crate::{extensions::*, registry::errors::into_status_error, state::State};

/// Register Name Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterNameRequest {
    /// Name as typed; stored trimmed and uppercased
    pub name: String,
}

/// Registered Name Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisteredNameResponse {
    /// Normalised name as stored
    pub name: String,

    /// The date and time the name was registered
    pub created_at: String,
}

impl From<RegisteredName> for RegisteredNameResponse {
    fn from(registered: RegisteredName) -> Self {
        Self {
            name: registered.name,
            created_at: registered.created_at.to_string(),
        }
    }
}

async fn register(
    json: JsonBody<RegisterNameRequest>,
    depot: &mut Depot,
    res: &mut Response,
    kind: RegistryKind,
) -> Result<Json<RegisteredNameResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let registered = state
        .app
        .registry
        .register(
            kind,
            NewName {
                name: json.into_inner().name,
            },
        )
        .await
        .map_err(|error| into_status_error(kind, error))?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(registered.into()))
}

/// Register Product Handler
#[endpoint(
    tags("registry"),
    summary = "Register Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product registered"),
        (status_code = StatusCode::CONFLICT, description = "Product already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Role cannot register"),
    ),
)]
pub(crate) async fn products(
    json: JsonBody<RegisterNameRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegisteredNameResponse>, StatusError> {
    register(json, depot, res, RegistryKind::Products).await
}

/// Register Distributor Handler
#[endpoint(
    tags("registry"),
    summary = "Register Distributor",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Distributor registered"),
        (status_code = StatusCode::CONFLICT, description = "Distributor already registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Role cannot register"),
    ),
)]
pub(crate) async fn distributors(
    json: JsonBody<RegisterNameRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RegisteredNameResponse>, StatusError> {
    register(json, depot, res, RegistryKind::Distributors).await
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use pricebook_app::domain::registry::{MockRegistryService, RegistryServiceError};

    use crate::test_helpers::registry_service;

    use super::*;

    fn make_service(registry: MockRegistryService) -> Service {
        registry_service(
            registry,
            Router::new()
                .push(Router::with_path("products").post(products))
                .push(Router::with_path("distributors").post(distributors)),
        )
    }

    #[tokio::test]
    async fn test_register_product_returns_201() -> TestResult {
        let mut registry = MockRegistryService::new();

        registry
            .expect_register()
            .once()
            .withf(|kind, new| *kind == RegistryKind::Products && new.name == " flour ")
            .return_once(|_, _| {
                Ok(RegisteredName {
                    name: "FLOUR".to_string(),
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": " flour " }))
            .send(&make_service(registry))
            .await;

        let body: RegisteredNameResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.name, "FLOUR");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_distributor_returns_409() -> TestResult {
        let mut registry = MockRegistryService::new();

        registry
            .expect_register()
            .once()
            .withf(|kind, _| *kind == RegistryKind::Distributors)
            .return_once(|_, _| Err(RegistryServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/distributors")
            .json(&json!({ "name": "metro" }))
            .send(&make_service(registry))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_blank_name_returns_400() -> TestResult {
        let mut registry = MockRegistryService::new();

        registry
            .expect_register()
            .once()
            .return_once(|_, _| Err(RegistryServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "   " }))
            .send(&make_service(registry))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_body_field_never_reaches_service() -> TestResult {
        let mut registry = MockRegistryService::new();

        registry.expect_register().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({}))
            .send(&make_service(registry))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
