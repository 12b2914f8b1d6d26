//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! GET  /api/data → handlers::fetch_data  → client.fetch()  → upstream GET
//! POST /api/data → handlers::submit_data → body::parse_payload
//!                                        → client.submit() → upstream POST
//!
//! upstream 2xx    → body verbatim, 200 (fetch) / 201 (submit)
//! bad JSON body   → 400, upstream not called
//! anything else   → logged, fixed plain-text 500
//! ```

pub mod body;
pub mod client;
pub mod error;
pub mod handlers;

use axum::http::StatusCode;

pub use client::{UpstreamClient, UpstreamResponse};
pub use error::{RelayFailure, UpstreamError};
pub use handlers::{fetch_data, submit_data};

/// Inbound path serving both relay operations.
pub const DATA_PATH: &str = "/api/data";

/// The two relay operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Fetch,
    Submit,
}

impl Operation {
    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Fetch => "fetch",
            Operation::Submit => "submit",
        }
    }

    /// Status returned to the caller when the upstream call succeeds.
    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::Fetch => StatusCode::OK,
            Operation::Submit => StatusCode::CREATED,
        }
    }

    /// Plain-text body returned to the caller when the upstream call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Error fetching data from the third-party API",
            Operation::Submit => "Error sending data to the third-party API",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
