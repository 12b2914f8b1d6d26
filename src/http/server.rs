//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay and documentation routes
//! - Wire up middleware (request ID, tracing, body limit)
//! - Serve on a bound listener until shutdown is triggered

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use crate::config::RelayConfig;
use crate::docs::setup_docs_router;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::shutdown::wait_for_trigger;
use crate::relay::{fetch_data, submit_data, UpstreamClient, UpstreamError, DATA_PATH};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, UpstreamError> {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);
        let state = AppState { upstream };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route(DATA_PATH, get(fetch_data).post(submit_data))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .with_state(state);

        if config.docs.enabled {
            router = router.merge(setup_docs_router(config));
        }

        let trace = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = request_id(request.headers()).unwrap_or("-"),
                )
            })
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            );

        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(trace)
                .layer(propagate_request_id_layer()),
        )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.resource_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_trigger(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
