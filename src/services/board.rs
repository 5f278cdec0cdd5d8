//! Board post calls, shared by all four board types.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use reqwest::Method;
use serde::Deserialize;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Board, BoardForm, BoardType, Page, SearchCondition};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Created {
    board_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthorCheck {
    is_author: bool,
}

fn post_path(board: BoardType, id: i64) -> String {
    format!("/board/{board}/{id}")
}

/// `GET /boards/{type}` with search filters.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn list(api: &ApiClient, board: BoardType, condition: &SearchCondition) -> Result<Page<Board>, ApiError> {
    let request = api.request(Method::GET, &format!("/boards/{board}")).query(condition);
    api.send_json(request).await
}

/// `GET /board/{type}/{id}`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn detail(api: &ApiClient, board: BoardType, id: i64) -> Result<Board, ApiError> {
    api.send_json(api.request(Method::GET, &post_path(board, id))).await
}

/// `POST /board/{type}` as multipart; returns the new post id.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn create(api: &ApiClient, board: BoardType, form: BoardForm) -> Result<i64, ApiError> {
    let request = api
        .request(Method::POST, &format!("/board/{board}"))
        .multipart(form.into_multipart());
    let created: Created = api.send_json(request).await?;
    Ok(created.board_id)
}

/// `PUT /board/{type}/{id}` as multipart.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn update(api: &ApiClient, board: BoardType, id: i64, form: BoardForm) -> Result<(), ApiError> {
    let request = api
        .request(Method::PUT, &post_path(board, id))
        .multipart(form.into_multipart());
    api.send_empty(request).await
}

/// `DELETE /board/{type}/{id}`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn delete(api: &ApiClient, board: BoardType, id: i64) -> Result<(), ApiError> {
    api.send_empty(api.request(Method::DELETE, &post_path(board, id))).await
}

/// `PATCH /board/{type}/{id}/increase-view`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn increase_view(api: &ApiClient, board: BoardType, id: i64) -> Result<(), ApiError> {
    let path = format!("{}/increase-view", post_path(board, id));
    api.send_empty(api.request(Method::PATCH, &path)).await
}

/// `GET /board/{type}/{id}/check-author`; true when the caller wrote the post.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn check_author(api: &ApiClient, board: BoardType, id: i64) -> Result<bool, ApiError> {
    let path = format!("{}/check-author", post_path(board, id));
    let check: AuthorCheck = api.send_json(api.request(Method::GET, &path)).await?;
    Ok(check.is_author)
}
