//! Upstream failure types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::relay::Operation;

/// Upstream response bodies are kept for the log, cut to this many chars.
const LOGGED_BODY_CHARS: usize = 512;

/// Everything that can go wrong talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream resource URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Rejected {
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl UpstreamError {
    pub(crate) fn rejected(url: &str, status: StatusCode, body: &str) -> Self {
        Self::Rejected {
            url: url.to_string(),
            status,
            body: body.chars().take(LOGGED_BODY_CHARS).collect(),
        }
    }

    /// Upstream status, when the upstream answered at all.
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status(),
            _ => None,
        }
    }
}

/// A failed relay operation as seen by the caller: a fixed 500 with the
/// operation's plain-text message. The upstream detail stays server side.
#[derive(Debug)]
pub struct RelayFailure {
    pub operation: Operation,
    pub error: UpstreamError,
}

impl IntoResponse for RelayFailure {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.operation.failure_message()).into_response()
    }
}
