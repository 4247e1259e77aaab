//! Frontend Models
//!
//! Records exchanged with the crowdfunding backend. Fields the UI reads are
//! typed; everything else lands in `extra` and is written back untouched,
//! so a parsed record re-serializes to the JSON it came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format;

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub goal: f64,
    #[serde(default)]
    pub raised_amount: f64,
    #[serde(default)]
    pub backers_count: u32,
    /// ISO-8601 timestamp, usually without offset (UTC)
    #[serde(default)]
    pub deadline: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn progress_percent(&self) -> u32 {
        format::progress_percent(self.raised_amount, self.goal)
    }

    pub fn days_left(&self, now: DateTime<Utc>) -> i64 {
        format::days_left(&self.deadline, now)
    }
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Full name when set, otherwise the username
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// A pledge toward a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: u32,
    pub amount: f64,
    pub project_id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub project_id: u32,
    #[serde(default)]
    pub user_id: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Platform totals; zeroed when unavailable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_projects: u64,
    #[serde(default)]
    pub total_raised: f64,
    #[serde(default)]
    pub total_backers: u64,
    #[serde(default)]
    pub total_users: u64,
}

/// `/search` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<Project>,
    #[serde(default)]
    pub total: u32,
}

// ========================
// Create / Update Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub goal: f64,
    /// `YYYY-MM-DDTHH:MM:SS`
    pub deadline: String,
    /// Category name; the backend creates unknown categories
    pub category: String,
    pub creator_id: u32,
}

/// Partial update; unset fields are left out of the body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInvestment {
    pub amount: f64,
    pub project_id: u32,
    pub user_id: u32,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub text: String,
    pub rating: u8,
    pub project_id: u32,
    pub user_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}
