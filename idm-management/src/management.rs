//! Shared management API client.
//!
//! Builds paths, encodes bodies and query strings, and turns raw
//! [`ApiResponse`](crate::ApiResponse)s into typed values or [`ManagementError::Remote`].

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ManagementConfig;
use crate::error::{ManagementError, RemoteError, Result};
use crate::http_client::{ApiRequest, Doer, HttpDoer, HttpMethod};
use crate::options::{RequestOption, encode_query};
use crate::utils::log_sanitizer::truncate_for_log;

/// Management API client shared by every resource manager.
///
/// Cloning is cheap; clones share the same [`Doer`].
#[derive(Clone)]
pub struct Management {
    doer: Arc<dyn Doer>,
}

impl Management {
    pub fn new(doer: Arc<dyn Doer>) -> Self {
        Self { doer }
    }

    /// Creates a client that talks HTTP through [`HttpDoer`].
    pub fn from_config(config: &ManagementConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpDoer::new(config)?)))
    }

    /// Joins `segments` into an absolute path, percent-encoding each one.
    ///
    /// `uri(&["custom-domains", "cd_1", "verify"])` gives
    /// `/custom-domains/cd_1/verify`. Empty segments are kept.
    pub fn uri(&self, segments: &[&str]) -> String {
        let mut path = String::new();
        for segment in segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }

    /// Encodes `options` as a query string (`""` when empty).
    pub fn query(&self, options: &[RequestOption]) -> String {
        encode_query(options)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(ApiRequest::new(HttpMethod::Get, path)).await?;
        decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(HttpMethod::Post, path).with_body(encode(body)?);
        let body = self.send(request).await?;
        decode(&body)
    }

    /// POST without a request body, used for action endpoints.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(ApiRequest::new(HttpMethod::Post, path)).await?;
        decode(&body)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(HttpMethod::Patch, path).with_body(encode(body)?);
        let body = self.send(request).await?;
        decode(&body)
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(ApiRequest::new(HttpMethod::Delete, path))
            .await
            .map(|_| ())
    }

    /// Executes one request and returns the body of a 2xx response.
    async fn send(&self, request: ApiRequest) -> Result<String> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.doer.execute(request).await?;
        if response.is_success() {
            return Ok(response.body);
        }

        let err = ManagementError::Remote(RemoteError::from_response(
            response.status,
            &response.body,
        ));
        if err.is_expected() {
            log::warn!("{method} {path} failed: {err}");
        } else {
            log::error!("{method} {path} failed: {err}");
        }
        Err(err)
    }
}

impl std::fmt::Debug for Management {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Management").finish_non_exhaustive()
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ManagementError::Serialization {
        detail: e.to_string(),
    })
}

/// Decodes a 2xx body. An empty body decodes as JSON `null`, so `Option<T>`
/// targets accept `204 No Content`.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let text = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        ManagementError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Overlays the fields of `response` onto `target`.
///
/// Keys present in the response replace the current values (an explicit
/// `null` clears the field); keys absent from the response leave the current
/// value untouched.
pub(crate) fn merge_into<T>(target: &mut T, response: Value) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let current = match (encode(&*target)?, response) {
        (Value::Object(mut fields), Value::Object(update)) => {
            fields.extend(update);
            Value::Object(fields)
        }
        (_, other) => other,
    };

    *target = serde_json::from_value(current).map_err(|e| ManagementError::Parse {
        detail: e.to_string(),
    })?;
    Ok(())
}
