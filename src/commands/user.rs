//! User Commands

use super::logged;
use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::{NewUser, User};

/// Register a user. Persisting it as the current user is up to the caller.
pub async fn create_user<T: Transport>(api: &ApiClient<T>, user: &NewUser) -> ApiResult<User> {
    logged("create user", api.post("/users", user).await)
}

pub async fn get_user<T: Transport>(api: &ApiClient<T>, user_id: u32) -> ApiResult<User> {
    let result = api.get(&format!("/users/{}", user_id), &[]).await;
    logged(&format!("get user {}", user_id), result)
}
