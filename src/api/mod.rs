//! Backend API Client
//!
//! Thin JSON-over-HTTP client. One attempt per call: no retries, no
//! timeout, no backoff. Any status outside 200-299 is `ApiError::Http`.

mod fetch;
#[cfg(test)]
pub mod mock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub use fetch::FetchTransport;

/// Query parameters in the order they are appended to the URL
pub type Params = Vec<(&'static str, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Request handed to a transport. The transport form-encodes `query`
/// onto `url` and sends `body` as `application/json`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam. The browser build uses `reqwest`; tests record requests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send one request. Only transport-level failures are errors here;
    /// non-2xx statuses come back as a normal response.
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, String)]) -> ApiResult<R> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.url(endpoint),
            query: params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            body: None,
        };
        self.execute(request).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(&self, endpoint: &str, data: &B) -> ApiResult<R> {
        self.send_json(Method::Post, endpoint, data).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(&self, endpoint: &str, data: &B) -> ApiResult<R> {
        self.send_json(Method::Put, endpoint, data).await
    }

    async fn send_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        data: &B,
    ) -> ApiResult<R> {
        let body = serde_json::to_value(data).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = HttpRequest {
            method,
            url: self.url(endpoint),
            query: Vec::new(),
            body: Some(body),
        };
        self.execute(request).await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Http { status: response.status });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
