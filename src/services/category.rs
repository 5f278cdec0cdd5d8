//! Board categories.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use reqwest::Method;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Category;

/// `GET /categories`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn all(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.send_json(api.request(Method::GET, "/categories")).await
}
