//! Login, signup and member lookups.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use reqwest::Method;
use serde::Deserialize;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, LoginRequest, Member, SignupRequest};

#[derive(Deserialize)]
struct DuplicateCheck {
    exists: bool,
}

/// `POST /login`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn login(api: &ApiClient, member_id: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = LoginRequest { member_id: member_id.to_owned(), password: password.to_owned() };
    api.send_json(api.request(Method::POST, "/login").json(&body)).await
}

/// `POST /member`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn signup(api: &ApiClient, request: &SignupRequest) -> Result<(), ApiError> {
    api.send_empty(api.request(Method::POST, "/member").json(request)).await
}

/// `GET /member/check-duplicate`; true when the id is already taken.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn check_duplicate(api: &ApiClient, member_id: &str) -> Result<bool, ApiError> {
    let request = api
        .request(Method::GET, "/member/check-duplicate")
        .query(&[("memberId", member_id)]);
    let check: DuplicateCheck = api.send_json(request).await?;
    Ok(check.exists)
}

/// `GET /member` for the logged-in member.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn current_member(api: &ApiClient) -> Result<Member, ApiError> {
    api.send_json(api.request(Method::GET, "/member")).await
}
