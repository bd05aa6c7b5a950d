//! Page access guard.

use pricebook_app::auth::Page;
use salvo::prelude::*;
use tracing::debug;

use crate::extensions::*;

/// Hoop that only lets through roles allowed to open `Page`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequirePage(pub(crate) Page);

#[handler]
impl RequirePage {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let role = match depot.role_or_401() {
            Ok(role) => role,
            Err(status) => {
                res.render(status);
                ctrl.skip_rest();

                return;
            }
        };

        if !role.can_access(self.0) {
            debug!(%role, page = ?self.0, "page access denied");

            res.render(StatusError::forbidden().brief("Role cannot access this page"));
            ctrl.skip_rest();

            return;
        }

        ctrl.call_next(req, depot, res).await;
    }
}

#[cfg(test)]
mod tests {
    use pricebook_app::auth::Role;
    use salvo::test::TestClient;

    use crate::test_helpers::{as_admin, as_viewer};

    use super::*;

    #[handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn service(role_hoop: Option<Router>, page: Page) -> Service {
        let guarded = Router::new().hoop(RequirePage(page)).get(ok);

        let router = match role_hoop {
            Some(router) => router.push(guarded),
            None => Router::new().push(guarded),
        };

        Service::new(router)
    }

    #[tokio::test]
    async fn viewer_is_forbidden_from_admin_pages() {
        for page in [Page::Entry, Page::Register, Page::Manage] {
            let res = TestClient::get("http://example.com")
                .send(&service(Some(Router::new().hoop(as_viewer)), page))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN), "page {page:?}");
        }
    }

    #[tokio::test]
    async fn viewer_may_open_analyser_and_export() {
        for page in Role::Viewer.pages() {
            let res = TestClient::get("http://example.com")
                .send(&service(Some(Router::new().hoop(as_viewer)), *page))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK), "page {page:?}");
        }
    }

    #[tokio::test]
    async fn admin_may_open_every_page() {
        for page in Role::Admin.pages() {
            let res = TestClient::get("http://example.com")
                .send(&service(Some(Router::new().hoop(as_admin)), *page))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK), "page {page:?}");
        }
    }

    #[tokio::test]
    async fn missing_role_returns_401() {
        let res = TestClient::get("http://example.com")
            .send(&service(None, Page::Analyser))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }
}
