//! Test helpers.

use std::sync::Arc;

use pricebook_app::{
    auth::{MockAuthService, Role},
    context::AppContext,
    domain::{
        exports::MockExportService, price_logs::MockPriceLogsService,
        registry::MockRegistryService,
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

/// One mock per service. Mocks without expectations fail on any call.
#[derive(Default)]
pub(crate) struct AppMocks {
    pub(crate) registry: MockRegistryService,
    pub(crate) price_logs: MockPriceLogsService,
    pub(crate) exports: MockExportService,
    pub(crate) auth: MockAuthService,
}

impl AppMocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            registry: Arc::new(self.registry),
            price_logs: Arc::new(self.price_logs),
            exports: Arc::new(self.exports),
            auth: Arc::new(self.auth),
        })
    }
}

#[salvo::handler]
pub(crate) async fn as_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_role(Role::Admin);
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn as_viewer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_role(Role::Viewer);
    ctrl.call_next(req, depot, res).await;
}

/// Serve `route` with the given mocks as an already-authenticated admin.
pub(crate) fn admin_service(mocks: AppMocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(as_admin)
            .push(route),
    )
}

pub(crate) fn registry_service(registry: MockRegistryService, route: Router) -> Service {
    admin_service(
        AppMocks {
            registry,
            ..AppMocks::default()
        },
        route,
    )
}

pub(crate) fn price_logs_service(price_logs: MockPriceLogsService, route: Router) -> Service {
    admin_service(
        AppMocks {
            price_logs,
            ..AppMocks::default()
        },
        route,
    )
}
