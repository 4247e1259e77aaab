//! Form Validation
//!
//! Raw form input as typed by the user, checked before anything is sent.
//! Limits mirror what the backend accepts.

use chrono::NaiveDate;

use crate::config::{MAX_PLEDGE_MESSAGE, MIN_PLEDGE};
use crate::error::FormError;
use crate::models::{NewProject, NewReview, NewUser, User};

fn check_length(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), FormError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(FormError::Length { field, min, max });
    }
    Ok(())
}

fn check_max(field: &'static str, value: &str, max: usize) -> Result<(), FormError> {
    if value.chars().count() > max {
        return Err(FormError::TooLong { field, max });
    }
    Ok(())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Accepts `1500`, `1500.50` and `1500,50`
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

// ========================
// Pledge
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PledgeForm {
    pub amount: String,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PledgeInput {
    pub amount: f64,
    pub name: String,
    pub message: Option<String>,
}

impl PledgeForm {
    /// Without a `backer` the name also has to work as a guest username.
    pub fn validate(&self, backer: Option<&User>) -> Result<PledgeInput, FormError> {
        let amount = parse_amount(&self.amount)
            .filter(|a| *a >= MIN_PLEDGE)
            .ok_or(FormError::AmountTooSmall { min: MIN_PLEDGE })?;
        let name = non_blank(&self.name).ok_or(FormError::MissingName)?;
        if backer.is_none() {
            check_length("Name", &username_from_name(&name), 3, 50)?;
        }
        let message = non_blank(&self.message);
        if let Some(message) = &message {
            check_max("Comment", message, MAX_PLEDGE_MESSAGE)?;
        }
        Ok(PledgeInput { amount, name, message })
    }
}

/// `"Anna  Maria Petrova"` -> `"anna_maria_petrova"`
pub fn username_from_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Throwaway registration for a backer who has not signed up
pub fn guest_user(name: &str, now_ms: i64) -> NewUser {
    NewUser {
        username: username_from_name(name),
        email: format!("user_{}@example.com", now_ms),
        full_name: Some(name.trim().to_string()),
    }
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

fn valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    }
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<NewUser, FormError> {
        let username = self.username.trim();
        check_length("Username", username, 3, 50)?;
        let email = self.email.trim();
        if !valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        let full_name = non_blank(&self.full_name);
        if let Some(name) = &full_name {
            check_length("Full name", name, 1, 100)?;
        }
        Ok(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            full_name,
        })
    }
}

// ========================
// Review
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewForm {
    pub text: String,
    pub rating: u8,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self { text: String::new(), rating: 5 }
    }
}

impl ReviewForm {
    pub fn validate(&self, project_id: u32, user: Option<&User>) -> Result<NewReview, FormError> {
        let user = user.ok_or(FormError::NotRegistered)?;
        let text = self.text.trim();
        check_length("Review", text, 10, 1000)?;
        if !(1..=5).contains(&self.rating) {
            return Err(FormError::InvalidRating);
        }
        Ok(NewReview {
            text: text.to_string(),
            rating: self.rating,
            project_id,
            user_id: user.id,
        })
    }
}

// ========================
// New Project
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub goal: String,
    /// `YYYY-MM-DD` from a date input
    pub deadline: String,
    pub category: String,
}

impl ProjectForm {
    pub fn validate(&self, creator: Option<&User>) -> Result<NewProject, FormError> {
        let creator = creator.ok_or(FormError::NotRegistered)?;
        let title = self.title.trim();
        check_length("Title", title, 5, 200)?;
        let description = self.description.trim();
        if description.chars().count() < 20 {
            return Err(FormError::TooShort { field: "Description", min: 20 });
        }
        let goal = parse_amount(&self.goal)
            .filter(|g| *g > 0.0)
            .ok_or(FormError::InvalidGoal)?;
        let deadline = NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDeadline)?;
        let category = non_blank(&self.category).ok_or(FormError::MissingCategory)?;

        Ok(NewProject {
            title: title.to_string(),
            description: description.to_string(),
            image_url: non_blank(&self.image_url),
            goal,
            deadline: format!("{}T23:59:59", deadline.format("%Y-%m-%d")),
            category,
            creator_id: creator.id,
        })
    }
}
