//! Search Command

use super::logged;
use crate::api::{ApiClient, Params, Transport};
use crate::error::ApiResult;
use crate::models::SearchResults;

/// Full-text search over titles and descriptions. `q` goes first, then
/// any extra filters in the order given.
pub async fn search_projects<T: Transport>(
    api: &ApiClient<T>,
    query: &str,
    filters: &[(&'static str, String)],
) -> ApiResult<SearchResults> {
    let mut params: Params = vec![("q", query.to_string())];
    params.extend(filters.iter().cloned());
    logged("search", api.get("/search", &params).await)
}
