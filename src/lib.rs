//! API relay library.
//!
//! Forwards `GET`/`POST /api/data` to a fixed upstream resource and returns
//! its response, and serves OpenAPI documentation at `/api-docs`.
//!
//! ```text
//!   Caller ──▶ http::server ──▶ relay::handlers ──▶ relay::client ──▶ Upstream API
//!   Caller ◀── passthrough (200/201) or fixed 500 ◀──────────────────────┘
//! ```

pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
