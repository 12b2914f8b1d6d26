//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! http::server TraceLayer → request span (method, path, request id)
//!                         → response event (status, latency ms)
//! relay::handlers         → upstream failure events (error detail)
//!                         → metrics.rs counters / histograms
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::init_metrics;
