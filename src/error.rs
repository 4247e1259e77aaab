//! Error Types

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Response arrived with a status outside 200-299
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),

    #[error("request encoding error: {0}")]
    Encode(String),

    #[error("response decoding error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Client-side form validation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter an amount of at least {min} ₽")]
    AmountTooSmall { min: f64 },

    #[error("Please enter your name")]
    MissingName,

    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("Goal must be greater than zero")]
    InvalidGoal,

    #[error("Please choose a deadline (YYYY-MM-DD)")]
    InvalidDeadline,

    #[error("Please choose a category")]
    MissingCategory,

    #[error("Please register before continuing")]
    NotRegistered,
}

/// Why a pledge was not recorded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PledgeError {
    #[error("{0}")]
    Invalid(#[from] FormError),

    #[error("Registration failed: {0}")]
    Registration(ApiError),

    #[error("Could not save your pledge: {0}")]
    Investment(ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_http() {
        assert_eq!(ApiError::Http { status: 404 }.status(), Some(404));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::Http { status: 500 }.to_string(), "HTTP 500");
        let err = PledgeError::from(FormError::AmountTooSmall { min: 100.0 });
        assert_eq!(err.to_string(), "Please enter an amount of at least 100 ₽");
    }
}
