//! Pricebook JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use pricebook_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod analysis;
mod auth;
mod config;
mod exports;
mod extensions;
mod healthcheck;
mod observability;
mod price_logs;
mod registry;
mod router;
mod sessions;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Pricebook JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing subscriber failed to install, eprintln is the only sink left"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();
    let shutdown_grace = config.server.shutdown_grace();

    info!("Starting server on {addr}");

    let app = match AppContext::from_config(config.into_app_config()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Pricebook API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, shutdown_grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    info!("server stopped");
}
