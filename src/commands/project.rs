//! Project Commands
//!
//! Listing, detail, creation and update of projects.

use std::fmt;
use std::str::FromStr;

use super::{logged, Page};
use crate::api::{ApiClient, Params, Transport};
use crate::error::ApiResult;
use crate::models::{NewProject, Project, ProjectUpdate};

/// Backend sort orders for `/projects`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Most backers first
    #[default]
    Popular,
    /// Newest first
    New,
    /// Closest deadline first
    Ending,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Popular, SortBy::New, SortBy::Ending];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Popular => "popular",
            SortBy::New => "new",
            SortBy::Ending => "ending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Popular => "Popular",
            SortBy::New => "Newest",
            SortBy::Ending => "Ending soon",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortBy::Popular),
            "new" => Ok(SortBy::New),
            "ending" => Ok(SortBy::Ending),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Filters for `GET /projects`; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    pub page: Page,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<SortBy>,
}

impl ProjectQuery {
    pub fn popular(limit: u32) -> Self {
        Self {
            page: Page::first(limit),
            sort_by: Some(SortBy::Popular),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = self.page.to_params();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(("sort_by", sort_by.as_str().to_string()));
        }
        params
    }
}

pub async fn list_projects<T: Transport>(api: &ApiClient<T>, query: &ProjectQuery) -> ApiResult<Vec<Project>> {
    logged("list projects", api.get("/projects", &query.to_params()).await)
}

pub async fn get_project<T: Transport>(api: &ApiClient<T>, project_id: u32) -> ApiResult<Project> {
    let result = api.get(&format!("/projects/{}", project_id), &[]).await;
    logged(&format!("get project {}", project_id), result)
}

pub async fn create_project<T: Transport>(api: &ApiClient<T>, project: &NewProject) -> ApiResult<Project> {
    logged("create project", api.post("/projects", project).await)
}

pub async fn update_project<T: Transport>(
    api: &ApiClient<T>,
    project_id: u32,
    update: &ProjectUpdate,
) -> ApiResult<Project> {
    let result = api.put(&format!("/projects/{}", project_id), update).await;
    logged(&format!("update project {}", project_id), result)
}

/// Most-funded projects for the landing page
pub async fn list_featured_projects<T: Transport>(api: &ApiClient<T>, limit: u32) -> ApiResult<Vec<Project>> {
    let params = vec![("limit", limit.to_string())];
    logged("list featured projects", api.get("/featured-projects", &params).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{pairs, MockTransport, MOCK_BASE};
    use crate::api::Method;
    use crate::commands::ResultExt;
    use serde_json::{json, Value};

    fn project_json(id: u32) -> Value {
        json!({
            "id": id,
            "title": "Solar kiosk",
            "description": "A solar-powered phone charging kiosk",
            "image_url": "https://img.example.com/kiosk.png",
            "goal": 1000.0,
            "raised_amount": 250.0,
            "backers_count": 3,
            "deadline": "2031-01-01T00:00:00",
            "created_at": "2025-01-01T00:00:00",
            "updated_at": "2025-01-02T00:00:00",
            "category_id": 1,
            "creator_id": 1
        })
    }

    #[test]
    fn test_sort_by_round_trip() {
        for sort in SortBy::ALL {
            assert_eq!(sort.as_str().parse::<SortBy>(), Ok(sort));
        }
        assert!("cheapest".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_query_params_in_order() {
        let query = ProjectQuery {
            page: Page::first(12),
            category: None,
            search: Some("garden".to_string()),
            sort_by: Some(SortBy::Ending),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("limit", "12".to_string()),
                ("search", "garden".to_string()),
                ("sort_by", "ending".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_projects_passes_body_through() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        let body = json!([project_json(1), project_json(2)]);
        api.transport().respond(Method::Get, "/projects", 200, body.clone());

        let projects = list_projects(&api, &ProjectQuery::popular(12)).await.unwrap();
        assert_eq!(serde_json::to_value(&projects).unwrap(), body);

        let sent = api.transport().requests();
        assert_eq!(sent[0].url, format!("{}/projects", MOCK_BASE));
        assert_eq!(sent[0].query, pairs(&[("limit", "12"), ("sort_by", "popular")]));
    }

    #[tokio::test]
    async fn test_failures_degrade_to_defaults() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(Method::Get, "/projects", 500, json!({"detail": "boom"}));

        assert!(list_projects(&api, &ProjectQuery::default()).await.or_fallback().is_empty());
        // unrouted -> 404
        assert_eq!(get_project(&api, 42).await.ok_or_none(), None);
        assert!(list_featured_projects(&api, 6).await.or_fallback().is_empty());
    }

    #[tokio::test]
    async fn test_update_project_uses_put() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(Method::Put, "/projects/1", 200, project_json(1));

        let update = ProjectUpdate { title: Some("Solar kiosk v2".to_string()), ..Default::default() };
        let project = update_project(&api, 1, &update).await.unwrap();
        assert_eq!(project.id, 1);

        let sent = api.transport().requests_to("/projects/1");
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].body, Some(json!({"title": "Solar kiosk v2"})));
    }
}
