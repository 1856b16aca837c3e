//! HTTP wrapper around the backend's JSON API.
//!
//! [`HttpClient`] owns the static connection settings, joins paths onto the
//! API root, unwraps the `{ code, message, data }` envelope and turns
//! failures into [`ApiError`]. Every failure is logged once here and handed
//! back unchanged so callers can add their own handling.

use std::{fmt, rc::Rc};

use async_trait::async_trait;
use auto_info_shared::Envelope;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config::ClientConfig;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case verb as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of one API call. `Display` is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response arrived (connection failure or timeout).
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status or a non-zero envelope code.
    #[error("{message}")]
    Server {
        /// HTTP status of the response.
        status: u16,
        /// Message taken from the error body.
        message: String,
    },
    /// A request or response body did not match the expected shape.
    #[error("{0}")]
    Codec(String),
}

impl ApiError {
    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server {
                status, ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// One logical API call before it is bound to a base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path below the API root, starting with `/`.
    pub path: String,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<String>,
}

impl ApiRequest {
    /// Request without query or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// `POST path`
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// `PUT path`
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// `DELETE path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Appends one query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter only when `value` is present.
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attaches `body` serialized as JSON.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ApiError::Codec(format!("Invalid request body: {e}")))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP verb.
    pub method: Method,
    /// Absolute or root-relative URL including the query string.
    pub url: String,
    /// Headers to send.
    pub headers: Vec<(&'static str, &'static str)>,
    /// JSON body.
    pub body: Option<String>,
    /// Give up and report [`ApiError::Network`] after this long.
    pub timeout_ms: u32,
}

/// Status and body of a response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the network.
///
/// Implementations return `Err` only when no response was received; any
/// status code, including errors, comes back as a [`RawResponse`].
#[async_trait(?Send)]
pub trait Transport {
    /// Performs one round trip.
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, ApiError>;
}

// FastAPI 的错误体：统一异常处理返回 message，参数校验失败返回 detail
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Shared, cheaply clonable handle to the API.
#[derive(Clone)]
pub struct HttpClient {
    transport: Rc<dyn Transport>,
    config: Rc<ClientConfig>,
}

impl HttpClient {
    /// Client sending through `transport` with the given settings.
    pub fn new(transport: Rc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Rc::new(config),
        }
    }

    /// Client using the browser's fetch API and the static configuration.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(Rc::new(crate::transport::FetchTransport), ClientConfig::default())
    }

    /// Resolves `request` against the API root, encoding the query string.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = if request.path.starts_with('/') {
            format!("{base}{}", request.path)
        } else {
            format!("{base}/{}", request.path)
        };

        if !request.query.is_empty() {
            let query = request
                .query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Sends `request` and returns the envelope's `data`.
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let url = self.url_for(&request);
        let response = self.execute(&request, &url).await?;
        let envelope: Envelope<T> = self.decode(&request, &url, &response)?;
        if envelope.code != 0 {
            let err = ApiError::Server {
                status: response.status,
                message: envelope.message,
            };
            tracing::error!(method = %request.method, %url, code = envelope.code, "response error: {err}");
            return Err(err);
        }
        Ok(envelope.data)
    }

    /// Sends `request` and decodes the body itself, for endpoints that do
    /// not wrap their payload in an envelope.
    pub async fn request_bare<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let url = self.url_for(&request);
        let response = self.execute(&request, &url).await?;
        self.decode(&request, &url, &response)
    }

    async fn execute(&self, request: &ApiRequest, url: &str) -> Result<RawResponse, ApiError> {
        let outgoing = TransportRequest {
            method: request.method,
            url: url.to_string(),
            headers: self.config.default_headers.clone(),
            body: request.body.clone(),
            timeout_ms: self.config.timeout_ms,
        };

        tracing::debug!(method = %request.method, %url, "sending request");
        let response = match self.transport.send(outgoing).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(method = %request.method, %url, "request error: {err}");
                return Err(err);
            },
        };

        if !response.is_success() {
            let err = server_error(&response);
            tracing::error!(
                method = %request.method,
                %url,
                status = response.status,
                "response error: {err}"
            );
            return Err(err);
        }
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        url: &str,
        response: &RawResponse,
    ) -> Result<T, ApiError> {
        serde_json::from_str(&response.body).map_err(|e| {
            let err = ApiError::Codec(format!("Invalid response body: {e}"));
            tracing::error!(method = %request.method, %url, "response error: {err}");
            err
        })
    }
}

fn server_error(response: &RawResponse) -> ApiError {
    let parsed = serde_json::from_str::<ErrorBody>(&response.body).ok();
    let message = parsed
        .and_then(|body| {
            body.message.filter(|m| !m.trim().is_empty()).or_else(|| {
                body.detail.map(|detail| match detail {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                })
            })
        })
        .unwrap_or_else(|| format!("Request failed with status code {}", response.status));

    ApiError::Server {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::MockTransport;

    #[test]
    fn url_for_joins_base_path_and_encoded_query() {
        let transport = MockTransport::new();
        let client = transport.client();
        let request = ApiRequest::get("/search").query("q", "rust & wasm").query("page", 2);
        assert_eq!(client.url_for(&request), "/api/search?q=rust%20%26%20wasm&page=2");
        assert_eq!(client.url_for(&ApiRequest::get("stats")), "/api/stats");
    }

    #[tokio::test]
    async fn request_unwraps_envelope_data() {
        let transport = MockTransport::new();
        transport.reply_data(Method::Get, "/stats", json!({"article_count": 3}));

        let data: serde_json::Value =
            transport.client().request(ApiRequest::get("/stats")).await.expect("stats");
        assert_eq!(data, json!({"article_count": 3}));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].timeout_ms, 10_000);
        assert!(sent[0].headers.contains(&("Content-Type", "application/json")));
    }

    #[tokio::test]
    async fn request_bare_returns_body_as_is() {
        let transport = MockTransport::new();
        transport.reply_json(Method::Get, "/articles", 200, json!({"items": [], "total": 0}));

        let body: serde_json::Value =
            transport.client().request_bare(ApiRequest::get("/articles")).await.expect("list");
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn non_2xx_uses_envelope_message() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles/missing",
            404,
            json!({"code": 404, "message": "文章不存在", "data": null}),
        );

        let err = transport
            .client()
            .request::<serde_json::Value>(ApiRequest::get("/articles/missing"))
            .await
            .expect_err("404 must fail");
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "文章不存在".to_string()
            }
        );
        assert_eq!(err.to_string(), "文章不存在");
    }

    #[tokio::test]
    async fn non_2xx_falls_back_to_detail_then_status_text() {
        let transport = MockTransport::new();
        transport.reply_json(Method::Post, "/categories", 422, json!({"detail": "name too long"}));
        transport.reply_text(Method::Get, "/stats", 502, "<html>bad gateway</html>");
        let client = transport.client();

        let err = client
            .request::<serde_json::Value>(ApiRequest::post("/categories"))
            .await
            .expect_err("422 must fail");
        assert_eq!(err.to_string(), "name too long");

        let err = client
            .request::<serde_json::Value>(ApiRequest::get("/stats"))
            .await
            .expect_err("502 must fail");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[tokio::test]
    async fn nonzero_code_on_success_status_is_a_server_error() {
        let transport = MockTransport::new();
        transport.reply_json(Method::Get, "/tags", 200, json!({"code": 1, "message": "busy", "data": null}));

        let err = transport
            .client()
            .request::<Option<serde_json::Value>>(ApiRequest::get("/tags"))
            .await
            .expect_err("code 1 must fail");
        assert_eq!(
            err,
            ApiError::Server {
                status: 200,
                message: "busy".to_string()
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_is_returned_unchanged() {
        let transport = MockTransport::new();
        let timeout = ApiError::Network("timeout of 10000ms exceeded".to_string());
        transport.fail(Method::Get, "/stats", timeout.clone());

        let err = transport
            .client()
            .request::<serde_json::Value>(ApiRequest::get("/stats"))
            .await
            .expect_err("timeout must fail");
        assert_eq!(err, timeout);
    }

    #[tokio::test]
    async fn malformed_body_is_a_codec_error() {
        let transport = MockTransport::new();
        transport.reply_text(Method::Get, "/stats", 200, "not json");

        let err = transport
            .client()
            .request::<serde_json::Value>(ApiRequest::get("/stats"))
            .await
            .expect_err("garbage must fail");
        assert!(matches!(err, ApiError::Codec(_)));
    }
}
