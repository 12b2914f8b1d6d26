use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::docs::openapi::NewPost;
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relay::body::parse_payload;
use crate::relay::{client::UpstreamResponse, error::UpstreamError, Operation, RelayFailure};

/// Relay a read of the upstream resource.
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "relay",
    summary = "Retrieve data from a third-party API",
    responses(
        (status = 200, description = "Successfully retrieved data"),
        (status = 500, description = "Error fetching data", body = String, content_type = "text/plain"),
    )
)]
pub async fn fetch_data(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start_time = Instant::now();
    let result = state.upstream.fetch(request_id(&headers)).await;
    finish(Operation::Fetch, result, start_time).into_response()
}

/// Relay the JSON body to the upstream resource as-is.
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "relay",
    summary = "Send data to a third-party API",
    request_body(content = NewPost, content_type = "application/json"),
    responses(
        (status = 201, description = "Successfully created resource"),
        (status = 400, description = "Malformed JSON body", body = String, content_type = "text/plain"),
        (status = 500, description = "Error sending data", body = String, content_type = "text/plain"),
    )
)]
pub async fn submit_data(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let start_time = Instant::now();

    let payload = match parse_payload(&headers, &body) {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected submission body");
            return rejection.into_response();
        }
    };

    let result = state.upstream.submit(&payload, request_id(&headers)).await;
    finish(Operation::Submit, result, start_time).into_response()
}

fn finish(
    operation: Operation,
    result: Result<UpstreamResponse, UpstreamError>,
    start_time: Instant,
) -> Result<Response, RelayFailure> {
    match result {
        Ok(upstream) => {
            let status = operation.success_status();
            metrics::record_request(operation.as_str(), status.as_u16(), start_time);
            Ok(upstream.passthrough(status))
        }
        Err(error) => {
            tracing::error!(
                operation = %operation,
                upstream_status = ?error.upstream_status(),
                error = %error,
                detail = ?error,
                "Upstream call failed"
            );
            metrics::record_upstream_failure(operation.as_str());
            metrics::record_request(operation.as_str(), 500, start_time);
            Err(RelayFailure { operation, error })
        }
    }
}
