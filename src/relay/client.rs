//! Outbound HTTP client for the upstream API.
//!
//! A non-success status is a failure, redirects are followed, and the
//! success body is returned untouched. No timeout is applied unless
//! `upstream.timeout_secs` is set.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use reqwest::RequestBuilder;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::UpstreamConfig;
use crate::http::request::X_REQUEST_ID;
use crate::relay::error::UpstreamError;

/// Successful upstream answer, kept as raw bytes for passthrough.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl UpstreamResponse {
    /// Build the caller's response: the upstream body verbatim under the
    /// relay's own status.
    pub fn passthrough(self, status: StatusCode) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        response
    }
}

/// Client bound to the single upstream resource.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    resource_url: Url,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let resource_url = Url::parse(&config.resource_url).map_err(|source| UpstreamError::InvalidUrl {
            url: config.resource_url.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().map_err(UpstreamError::Client)?;
        Ok(Self { http, resource_url })
    }

    pub fn resource_url(&self) -> &Url {
        &self.resource_url
    }

    /// GET the upstream resource.
    pub async fn fetch(&self, request_id: Option<&str>) -> Result<UpstreamResponse, UpstreamError> {
        let request = self.http.get(self.resource_url.clone());
        self.send(request, request_id).await
    }

    /// POST `payload` to the upstream resource as JSON.
    pub async fn submit(&self, payload: &Value, request_id: Option<&str>) -> Result<UpstreamResponse, UpstreamError> {
        let request = self.http.post(self.resource_url.clone()).json(payload);
        self.send(request, request_id).await
    }

    async fn send(&self, mut request: RequestBuilder, request_id: Option<&str>) -> Result<UpstreamResponse, UpstreamError> {
        if let Some(id) = request_id {
            request = request.header(X_REQUEST_ID, id);
        }

        let response = request.send().await.map_err(|e| self.transport(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::rejected(self.resource_url.as_str(), status, &body));
        }

        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(|e| self.transport(e))?;

        tracing::debug!(
            url = %self.resource_url,
            status = %status,
            bytes = body.len(),
            "Upstream responded"
        );

        Ok(UpstreamResponse {
            content_type,
            body,
        })
    }

    fn transport(&self, source: reqwest::Error) -> UpstreamError {
        UpstreamError::Transport {
            url: self.resource_url.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparsable_url() {
        let config = UpstreamConfig {
            resource_url: "::not a url::".into(),
            ..UpstreamConfig::default()
        };
        let err = UpstreamClient::new(&config).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidUrl { .. }));
    }

    #[test]
    fn test_default_targets_jsonplaceholder() {
        let client = UpstreamClient::new(&UpstreamConfig::default()).unwrap();
        assert_eq!(client.resource_url().as_str(), "https://jsonplaceholder.typicode.com/posts");
    }

    #[tokio::test]
    async fn test_passthrough_keeps_bytes_and_content_type() {
        let upstream = UpstreamResponse {
            content_type: Some(HeaderValue::from_static("application/json; charset=utf-8")),
            body: Bytes::from_static(br#"[ {"id":1, "title":"a"} ]"#),
        };

        let response = upstream.passthrough(StatusCode::CREATED);
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json; charset=utf-8");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"[ {"id":1, "title":"a"} ]"#);
    }

    #[test]
    fn test_passthrough_defaults_to_json_content_type() {
        let upstream = UpstreamResponse {
            content_type: None,
            body: Bytes::from_static(b"{}"),
        };
        let response = upstream.passthrough(StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }
}
