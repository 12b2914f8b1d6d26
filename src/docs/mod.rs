//! API documentation subsystem.
//!
//! The OpenAPI document is derived from the `#[utoipa::path]` annotations on
//! the relay handlers and served with Swagger UI (assets bundled into the
//! binary): `GET <docs.path>/` for the page, `GET <docs.path>/openapi.json`
//! for the document. `GET <docs.path>` redirects to the page.

pub mod openapi;

use axum::Router;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::RelayConfig;

/// Router serving the documentation under `config.docs.path`.
pub fn setup_docs_router(config: &RelayConfig) -> Router {
    let base = config.docs.path.trim_end_matches('/').to_string();
    let document_url = format!("{base}/openapi.json");

    Router::new().merge(SwaggerUi::new(base).url(document_url, openapi::build_document(config)))
}
