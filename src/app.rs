use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post, IntoMakeService};
use axum::{Router, Server};
use hyper::server::conn::AddrIncoming;
use hyper::{Body, Request};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::{DatabaseSettings, Settings};
use crate::ledger::{Ledger, PgLedger};
use crate::routes::{generate_content, generate_research_brief, handle_panic, health_check};

pub type AppServer = Server<AddrIncoming, IntoMakeService<Router>>;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn Ledger>,
}

/// Wires the Postgres ledger from settings and binds the server.
pub fn build(settings: &Settings) -> anyhow::Result<AppServer> {
    let ledger = PgLedger::new(get_db_pool(&settings.database));
    run(settings, Arc::new(ledger))
}

pub fn get_db_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(config.with_db())
}

pub fn run(settings: &Settings, ledger: Arc<dyn Ledger>) -> anyhow::Result<AppServer> {
    let address = settings.application.address()?;
    let cors = settings.cors.layer()?;

    let app = Router::new()
        .route("/health_check", get(health_check))
        .route("/generate-content", post(generate_content))
        .route("/generate-research-brief", post(generate_research_brief))
        .with_state(AppState { ledger })
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(
                    |request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|id| id.to_str().ok())
                            .unwrap_or_default();
                        tracing::info_span!(
                            "request",
                            %request_id,
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                        )
                    },
                ))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors)
                .layer(CatchPanicLayer::custom(handle_panic)),
        );

    Ok(Server::try_bind(&address)?.serve(app.into_make_service()))
}
