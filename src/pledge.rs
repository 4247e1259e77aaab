//! Pledge Flow
//!
//! Validate the pledge form, make sure there is a backer to attribute it
//! to, then record the investment. Nothing is sent for an invalid form.

use crate::api::{ApiClient, Transport};
use crate::commands;
use crate::error::PledgeError;
use crate::forms::{guest_user, PledgeForm};
use crate::models::{Investment, NewInvestment, User};

/// Record a pledge for `project_id`.
///
/// Without a current user a guest account is registered first from the
/// entered name; `on_registered` sees it before the investment is sent so
/// the caller can persist it even if the pledge itself then fails.
/// A failed registration aborts the pledge.
pub async fn submit_pledge<T, F>(
    api: &ApiClient<T>,
    project_id: u32,
    form: &PledgeForm,
    current_user: Option<&User>,
    now_ms: i64,
    on_registered: F,
) -> Result<Investment, PledgeError>
where
    T: Transport,
    F: FnOnce(&User),
{
    let input = form.validate(current_user)?;

    let user_id = match current_user {
        Some(user) => user.id,
        None => {
            let user = commands::create_user(api, &guest_user(&input.name, now_ms))
                .await
                .map_err(PledgeError::Registration)?;
            log::info!("registered backer {} as user {}", user.username, user.id);
            on_registered(&user);
            user.id
        }
    };

    let investment = NewInvestment {
        amount: input.amount,
        project_id,
        user_id,
        message: input.message,
    };
    commands::create_investment(api, &investment)
        .await
        .map_err(PledgeError::Investment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{MockTransport, MOCK_BASE};
    use crate::api::Method;
    use crate::error::{ApiError, FormError};
    use serde_json::{json, Map, Value};
    use std::cell::RefCell;

    const NOW_MS: i64 = 1_735_689_600_000;

    fn api() -> ApiClient<MockTransport> {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(
            Method::Post,
            "/users",
            200,
            json!({"id": 21, "username": "pavel_s", "email": "user_1735689600000@example.com", "full_name": "Pavel S"}),
        );
        api.transport().respond(
            Method::Post,
            "/investments",
            200,
            json!({"id": 5, "amount": 1000.0, "message": null, "project_id": 7, "user_id": 21}),
        );
        api
    }

    fn form(amount: &str, name: &str) -> PledgeForm {
        PledgeForm { amount: amount.into(), name: name.into(), message: String::new() }
    }

    fn body_of(api: &ApiClient<MockTransport>, path: &str) -> Value {
        let sent = api.transport().requests_to(path);
        sent[0].body.clone().expect("request had no body")
    }

    #[tokio::test]
    async fn test_invalid_pledge_sends_nothing() {
        let api = api();

        let err = submit_pledge(&api, 7, &form("99", "Pavel S"), None, NOW_MS, |_| {}).await.unwrap_err();
        assert_eq!(err, PledgeError::Invalid(FormError::AmountTooSmall { min: 100.0 }));

        let err = submit_pledge(&api, 7, &form("1000", ""), None, NOW_MS, |_| {}).await.unwrap_err();
        assert_eq!(err, PledgeError::Invalid(FormError::MissingName));

        // "jo" would be rejected by /users
        let err = submit_pledge(&api, 7, &form("1000", "Jo"), None, NOW_MS, |_| {}).await.unwrap_err();
        assert_eq!(err, PledgeError::Invalid(FormError::Length { field: "Name", min: 3, max: 50 }));

        assert!(api.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_guest_is_registered_then_pledge_sent() {
        let api = api();
        let registered = RefCell::new(None);

        let investment = submit_pledge(&api, 7, &form("1000", "Pavel S"), None, NOW_MS, |u| {
            *registered.borrow_mut() = Some(u.id)
        })
        .await
        .unwrap();

        assert_eq!(investment.id, 5);
        assert_eq!(*registered.borrow(), Some(21));
        assert_eq!(
            body_of(&api, "/users"),
            json!({"username": "pavel_s", "email": "user_1735689600000@example.com", "full_name": "Pavel S"})
        );
        assert_eq!(
            body_of(&api, "/investments"),
            json!({"amount": 1000.0, "project_id": 7, "user_id": 21, "message": null})
        );
    }

    #[tokio::test]
    async fn test_existing_user_skips_registration() {
        let api = api();
        let me = User {
            id: 3,
            username: "pavel".into(),
            email: "pavel@example.com".into(),
            full_name: None,
            extra: Map::new(),
        };
        let mut pledge = form("250", "Pavel");
        pledge.message = "For the kids".into();

        submit_pledge(&api, 7, &pledge, Some(&me), NOW_MS, |_| panic!("should not register"))
            .await
            .unwrap();

        assert!(api.transport().requests_to("/users").is_empty());
        assert_eq!(body_of(&api, "/investments")["user_id"], json!(3));
        assert_eq!(body_of(&api, "/investments")["message"], json!("For the kids"));
    }

    #[tokio::test]
    async fn test_failed_registration_aborts() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(Method::Post, "/users", 400, json!({"detail": "Email already registered"}));

        let err = submit_pledge(&api, 7, &form("500", "Pavel"), None, NOW_MS, |_| {}).await.unwrap_err();
        assert_eq!(err, PledgeError::Registration(ApiError::Http { status: 400 }));
        assert!(api.transport().requests_to("/investments").is_empty());
    }

    #[tokio::test]
    async fn test_closed_project_reports_investment_error() {
        let api = ApiClient::new(MOCK_BASE, MockTransport::new());
        api.transport().respond(Method::Post, "/investments", 400, json!({"detail": "Project finished"}));
        let me = User { id: 3, username: "pavel".into(), email: String::new(), full_name: None, extra: Map::new() };

        let err = submit_pledge(&api, 7, &form("500", "Pavel"), Some(&me), NOW_MS, |_| {}).await.unwrap_err();
        assert_eq!(err, PledgeError::Investment(ApiError::Http { status: 400 }));
    }
}
