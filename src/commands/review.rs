//! Review Commands

use super::{logged, Page};
use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::{NewReview, Review};

pub async fn create_review<T: Transport>(api: &ApiClient<T>, review: &NewReview) -> ApiResult<Review> {
    logged("create review", api.post("/reviews", review).await)
}

/// Newest first, as ordered by the backend
pub async fn list_project_reviews<T: Transport>(api: &ApiClient<T>, project_id: u32, page: Page) -> ApiResult<Vec<Review>> {
    let result = api
        .get(&format!("/reviews/project/{}", project_id), &page.to_params())
        .await;
    logged("list project reviews", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockTransport, MOCK_BASE};
    use crate::api::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_reviews_returns_records_unchanged() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        let body = json!([
            {"id": 2, "text": "Second thoughts, still great", "rating": 4, "created_at": "2025-02-02T00:00:00", "project_id": 5, "user_id": 1},
            {"id": 1, "text": "Backed it on day one", "rating": 5, "created_at": "2025-02-01T00:00:00", "project_id": 5, "user_id": 2}
        ]);
        api.transport().respond(Method::Get, "/reviews/project/5", 200, body.clone());

        let reviews = list_project_reviews(&api, 5, Page::default()).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(serde_json::to_value(&reviews).unwrap(), body);
    }

    #[tokio::test]
    async fn test_create_review_rejected() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(Method::Post, "/reviews", 422, json!({"detail": []}));

        let review = NewReview { text: "short".into(), rating: 9, project_id: 5, user_id: 1 };
        let err = create_review(&api, &review).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
    }
}
