//! Comments on board posts.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use reqwest::Method;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{BoardType, Comment, CommentRequest};

/// `GET /comment?boardType=&boardId=`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn list(api: &ApiClient, board: BoardType, board_id: i64) -> Result<Vec<Comment>, ApiError> {
    let request = api
        .request(Method::GET, "/comment")
        .query(&[("boardType", board.as_str().to_owned()), ("boardId", board_id.to_string())]);
    api.send_json(request).await
}

/// `POST /comment`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn create(api: &ApiClient, request: &CommentRequest) -> Result<(), ApiError> {
    api.send_empty(api.request(Method::POST, "/comment").json(request)).await
}

/// `DELETE /comment/{id}`.
///
/// # Errors
///
/// Propagates any API failure.
pub async fn delete(api: &ApiClient, comment_id: i64) -> Result<(), ApiError> {
    api.send_empty(api.request(Method::DELETE, &format!("/comment/{comment_id}"))).await
}
