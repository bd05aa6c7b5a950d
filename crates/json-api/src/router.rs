//! App Router

use pricebook_app::auth::Page;
use salvo::{Handler, Router};

use crate::{
    analysis,
    auth::{self, RequirePage},
    exports, price_logs, registry, sessions,
};

/// Every route a client can reach, with authentication and page guards.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("sessions").post(sessions::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(registry_router(
                    "products",
                    registry::index::products,
                    registry::create::products,
                    registry::availability::products,
                ))
                .push(registry_router(
                    "distributors",
                    registry::index::distributors,
                    registry::create::distributors,
                    registry::availability::distributors,
                ))
                .push(price_logs_router())
                .push(
                    Router::with_path("analysis/best-price")
                        .hoop(RequirePage(Page::Analyser))
                        .get(analysis::best_price::handler),
                )
                .push(
                    Router::with_path("exports/price-logs.xlsx")
                        .hoop(RequirePage(Page::Export))
                        .get(exports::price_logs::handler),
                ),
        )
}

fn registry_router(
    path: &str,
    index: impl Handler,
    create: impl Handler,
    availability: impl Handler,
) -> Router {
    Router::with_path(path)
        .get(index)
        .push(Router::new().hoop(RequirePage(Page::Register)).post(create))
        .push(
            Router::with_path("availability")
                .hoop(RequirePage(Page::Register))
                .get(availability),
        )
}

fn price_logs_router() -> Router {
    Router::with_path("price-logs")
        .get(price_logs::index::handler)
        .push(
            Router::new()
                .hoop(RequirePage(Page::Entry))
                .post(price_logs::create::handler),
        )
        .push(
            Router::with_path("commit")
                .hoop(RequirePage(Page::Manage))
                .post(price_logs::commit::handler),
        )
        .push(
            Router::with_path("{id}")
                .get(price_logs::get::handler)
                .push(
                    Router::new()
                        .hoop(RequirePage(Page::Manage))
                        .put(price_logs::update::handler)
                        .delete(price_logs::delete::handler),
                ),
        )
}
