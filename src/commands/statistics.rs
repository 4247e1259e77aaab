//! Statistics Command

use super::logged;
use crate::api::{ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::Statistics;

pub async fn get_statistics<T: Transport>(api: &ApiClient<T>) -> ApiResult<Statistics> {
    logged("get statistics", api.get("/statistics", &[]).await)
}
