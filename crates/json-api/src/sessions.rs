//! Session (login) Handler

use std::sync::Arc;

use pricebook_app::auth::{AuthServiceError, Role};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Login request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateSessionRequest {
    /// Access key handed out to the user
    pub access_key: String,
}

/// Role granted by the access key and the pages it unlocks
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SessionResponse {
    /// `admin` or `viewer`
    pub role: String,

    /// Pages the role may open, in menu order
    pub pages: Vec<String>,
}

impl From<Role> for SessionResponse {
    fn from(role: Role) -> Self {
        Self {
            role: role.as_str().to_string(),
            pages: role
                .pages()
                .iter()
                .map(|page| page.as_str().to_string())
                .collect(),
        }
    }
}

/// Create Session Handler
///
/// Exchanges an access key for the role and page list.
#[endpoint(
    tags("sessions"),
    summary = "Log In",
    responses(
        (status_code = StatusCode::OK, description = "Access key accepted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Access key rejected"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateSessionRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let role = state
        .app
        .auth
        .authenticate(&json.into_inner().access_key)
        .await
        .map_err(|error| match error {
            AuthServiceError::InvalidAccessKey => {
                StatusError::unauthorized().brief("Invalid access key")
            }
        })?;

    Ok(Json(role.into()))
}

#[cfg(test)]
mod tests {
    use pricebook_app::auth::MockAuthService;
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::AppMocks;

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        let state = AppMocks {
            auth,
            ..AppMocks::default()
        }
        .into_state();

        Service::new(
            Router::new()
                .hoop(inject(state))
                .push(Router::with_path("sessions").post(handler)),
        )
    }

    #[tokio::test]
    async fn test_admin_key_lists_every_page() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate()
            .once()
            .withf(|key| key == "admin-key")
            .return_once(|_| Ok(Role::Admin));

        let mut res = TestClient::post("http://example.com/sessions")
            .json(&json!({ "access_key": "admin-key" }))
            .send(&make_service(auth))
            .await;

        let body: SessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.role, "admin");
        assert_eq!(body.pages.len(), 5, "admin sees every page");

        Ok(())
    }

    #[tokio::test]
    async fn test_viewer_key_lists_analyser_and_export() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate()
            .once()
            .return_once(|_| Ok(Role::Viewer));

        let body: serde_json::Value = TestClient::post("http://example.com/sessions")
            .json(&json!({ "access_key": "viewer-key" }))
            .send(&make_service(auth))
            .await
            .take_json()
            .await?;

        assert_eq!(
            body,
            json!({ "role": "viewer", "pages": ["analyser", "export"] })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_bad_key_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate()
            .once()
            .return_once(|_| Err(AuthServiceError::InvalidAccessKey));

        let res = TestClient::post("http://example.com/sessions")
            .json(&json!({ "access_key": "nope" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
