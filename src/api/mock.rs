//! Recording transport for tests

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::{ApiError, ApiResult};

pub const MOCK_BASE: &str = "http://backend.test/api";

/// Canned responses keyed by method and path.
/// Unrouted requests answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(Method, String), HttpResponse>>,
    requests: RefCell<Vec<HttpRequest>>,
    offline: RefCell<bool>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.borrow_mut().insert(
            (method, path.to_string()),
            HttpResponse { status, body: body.to_string() },
        );
    }

    /// Every later request fails before reaching the backend
    pub fn fail_network(&self) {
        *self.offline.borrow_mut() = true;
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Requests sent to `path`, any method
    pub fn requests_to(&self, path: &str) -> Vec<HttpRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| path_of(&r.url) == path)
            .cloned()
            .collect()
    }
}

fn path_of(url: &str) -> &str {
    url.strip_prefix(MOCK_BASE).unwrap_or(url)
}

/// Owned query pairs, for comparing against `HttpRequest::query`
pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(request.clone());
        if *self.offline.borrow() {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        let key = (request.method, path_of(&request.url).to_string());
        Ok(self
            .routes
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or(HttpResponse { status: 404, body: r#"{"detail":"Not Found"}"#.to_string() }))
    }
}
