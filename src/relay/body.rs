//! Inbound JSON body handling for submissions.
//!
//! Only `application/json` bodies are parsed. Any other (or missing)
//! content type, and an empty JSON body, yield `{}`. Parsing is strict: the
//! top-level value must be an object or an array.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a submission body was refused.
#[derive(Debug, Error)]
pub enum PayloadRejection {
    #[error("Request body is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Request body must be a JSON object or array")]
    NotStructured,
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// True when the request declares an `application/json` body.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Turn an inbound request body into the payload forwarded upstream.
pub fn parse_payload(headers: &HeaderMap, body: &[u8]) -> Result<Value, PayloadRejection> {
    if !is_json_content_type(headers) {
        return Ok(Value::Object(Map::new()));
    }

    let first = body
        .iter()
        .find(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'));

    match first {
        None => Ok(Value::Object(Map::new())),
        Some(b'{') | Some(b'[') => Ok(serde_json::from_slice(body)?),
        Some(_) => Err(PayloadRejection::NotStructured),
    }
}
