//! Category Commands

use super::logged;
use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::Category;

pub async fn list_categories<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Category>> {
    logged("list categories", api.get("/categories", &[]).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockTransport, MOCK_BASE};
    use crate::api::Method;
    use crate::commands::ResultExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_categories() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(
            Method::Get,
            "/categories",
            200,
            json!([{"id": 1, "name": "Technology"}, {"id": 2, "name": "Art"}]),
        );

        let names: Vec<String> = list_categories(&api).await.or_fallback().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Technology", "Art"]);
    }

    #[tokio::test]
    async fn test_offline_gives_empty_list() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().fail_network();
        assert!(list_categories(&api).await.or_fallback().is_empty());
    }
}
