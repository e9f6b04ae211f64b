//! HTTP transport capability
//!
//! [`Doer`] is the seam between the typed managers and the wire. It executes a
//! single request and hands back the raw status and body; it never interprets
//! status codes. [`HttpDoer`] is the reqwest implementation used in
//! production, tests substitute their own.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::config::ManagementConfig;
use crate::error::{ManagementError, Result};
use crate::utils::log_sanitizer::{redact_token, truncate_for_log};

/// HTTP verbs used by the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound request, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path plus encoded query string, starting with `/`.
    pub path: String,
    /// JSON body; `None` sends no body at all.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response as seen on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the management API.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; only transport failures are errors. Implementations must be safe to
/// share across tasks.
#[async_trait]
pub trait Doer: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// [`Doer`] backed by a `reqwest::Client`.
///
/// Sends `Authorization: Bearer <token>` on every request and JSON bodies with
/// `Content-Type: application/json`. Timeouts come from [`ManagementConfig`].
pub struct HttpDoer {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpDoer {
    pub fn new(config: &ManagementConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ManagementError::InvalidConfig {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        let builder = builder.bearer_auth(&self.token);
        match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        }
    }
}

impl std::fmt::Debug for HttpDoer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDoer")
            .field("base_url", &self.base_url)
            .field("token", &redact_token(&self.token))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Doer for HttpDoer {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        log::debug!("{} {}{}", request.method, self.base_url, request.path);
        if let Some(body) = &request.body {
            log::debug!("Request Body: {}", truncate_for_log(&body.to_string()));
        }

        let response = self.build(&request).send().await.map_err(|e| {
            if e.is_timeout() {
                ManagementError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ManagementError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ManagementError::Network {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(ApiResponse { status, body })
    }
}
