//! Investment Commands

use super::{logged, Page};
use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::{Investment, NewInvestment};

pub async fn create_investment<T: Transport>(api: &ApiClient<T>, investment: &NewInvestment) -> ApiResult<Investment> {
    let result: ApiResult<Investment> = logged("create investment", api.post("/investments", investment).await);
    if let Ok(saved) = &result {
        log::info!("investment {} saved for project {}", saved.id, saved.project_id);
    }
    result
}

pub async fn list_project_investments<T: Transport>(
    api: &ApiClient<T>,
    project_id: u32,
    page: Page,
) -> ApiResult<Vec<Investment>> {
    let result = api
        .get(&format!("/investments/project/{}", project_id), &page.to_params())
        .await;
    logged("list project investments", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{pairs, MockTransport, MOCK_BASE};
    use crate::api::Method;
    use crate::commands::ResultExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_investment_posts_payload() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(
            Method::Post,
            "/investments",
            200,
            json!({"id": 11, "amount": 500.0, "message": "Good luck", "created_at": "2025-03-01T10:00:00", "project_id": 3, "user_id": 9}),
        );

        let pledge = NewInvestment { amount: 500.0, project_id: 3, user_id: 9, message: Some("Good luck".into()) };
        let saved = create_investment(&api, &pledge).await.unwrap();
        assert_eq!(saved.id, 11);
        assert_eq!(saved.message.as_deref(), Some("Good luck"));

        let sent = api.transport().requests();
        assert_eq!(sent[0].body, Some(json!({"amount": 500.0, "project_id": 3, "user_id": 9, "message": "Good luck"})));
    }

    #[tokio::test]
    async fn test_list_investments_paging_and_fallback() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        let investments = list_project_investments(&api, 3, Page::first(5)).await.or_fallback();
        assert!(investments.is_empty());

        let sent = api.transport().requests();
        assert_eq!(sent[0].url, format!("{}/investments/project/3", MOCK_BASE));
        assert_eq!(sent[0].query, pairs(&[("limit", "5")]));
    }
}
