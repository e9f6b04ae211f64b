//! In-memory [`Doer`] for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::{ApiRequest, ApiResponse, Doer, HttpMethod};

/// Answers with canned responses keyed by method and path, and records every
/// request it sees. Unknown routes get a 404 in the service's error format.
#[derive(Default)]
pub(crate) struct FakeDoer {
    routes: Mutex<HashMap<(HttpMethod, String), ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeDoer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), ApiResponse::new(status, body));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Doer for FakeDoer {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        let canned = self.routes.lock().unwrap().get(&key).cloned();
        Ok(canned.unwrap_or_else(|| {
            ApiResponse::new(
                404,
                r#"{"statusCode":404,"error":"Not Found","message":"Not Found"}"#,
            )
        }))
    }
}
