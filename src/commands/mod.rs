//! Backend Call Wrappers
//!
//! One function per backend operation, organized by domain. Each binds a
//! fixed endpoint and verb, logs failures, and hands back the `Result` so
//! the UI decides what to show. `ResultExt` supplies the safe defaults.

mod category;
mod investment;
mod project;
mod review;
mod search;
mod statistics;
mod user;

use crate::api::{ApiClient, FetchTransport, Params};
use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::models::{SearchResults, Statistics};

// Re-export all public items
pub use category::*;
pub use investment::*;
pub use project::*;
pub use review::*;
pub use search::*;
pub use statistics::*;
pub use user::*;

/// Client used by the browser build
pub type Api = ApiClient<FetchTransport>;

/// Browser client pointed at the configured backend
pub fn api() -> Api {
    ApiClient::new(AppConfig::load().api_url, FetchTransport::new())
}

/// `skip` / `limit` for list endpoints that page
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Page {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl Page {
    pub fn first(limit: u32) -> Self {
        Self { skip: None, limit: Some(limit) }
    }

    fn to_params(self) -> Params {
        let mut params = Params::new();
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Log a failed call under its operation name
fn logged<T>(operation: &str, result: ApiResult<T>) -> ApiResult<T> {
    if let Err(err) = &result {
        log::error!("{} failed: {}", operation, err);
    }
    result
}

/// Value a list/summary call degrades to when the backend is unavailable
pub trait Fallback {
    fn fallback() -> Self;
}

impl<T> Fallback for Vec<T> {
    fn fallback() -> Self {
        Vec::new()
    }
}

impl Fallback for Statistics {
    fn fallback() -> Self {
        Statistics::default()
    }
}

impl Fallback for SearchResults {
    fn fallback() -> Self {
        SearchResults::default()
    }
}

/// Degrade a wrapper result instead of propagating the error
pub trait ResultExt<T> {
    /// Empty list, zeroed statistics, or empty search results on error
    fn or_fallback(self) -> T
    where
        T: Fallback;

    /// `None` on error, for single records
    fn ok_or_none(self) -> Option<T>;
}

impl<T> ResultExt<T> for ApiResult<T> {
    fn or_fallback(self) -> T
    where
        T: Fallback,
    {
        self.unwrap_or_else(|_| T::fallback())
    }

    fn ok_or_none(self) -> Option<T> {
        self.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_page_params() {
        assert!(Page::default().to_params().is_empty());
        assert_eq!(
            Page { skip: Some(10), limit: Some(5) }.to_params(),
            vec![("skip", "10".to_string()), ("limit", "5".to_string())]
        );
    }

    #[test]
    fn test_fallbacks() {
        let failed: ApiResult<Statistics> = Err(ApiError::Http { status: 503 });
        assert_eq!(failed.or_fallback(), Statistics::default());

        let failed: ApiResult<Vec<u32>> = Err(ApiError::Network("offline".into()));
        assert!(failed.or_fallback().is_empty());

        let failed: ApiResult<u32> = Err(ApiError::Http { status: 404 });
        assert_eq!(failed.ok_or_none(), None);

        let fine: ApiResult<Vec<u32>> = Ok(vec![1, 2]);
        assert_eq!(fine.or_fallback(), vec![1, 2]);
    }
}
