//! Wire DTOs for the board API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Response types default
//! missing fields where the backend omits them for some board kinds, and
//! `Board` keeps any board-specific extras (attachments, thumbnails,
//! answers) in a flattened map instead of one struct per board kind.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// BOARD TYPE
// =============================================================================

/// The four boards of the site. Used in both API and page paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    Notice,
    Free,
    Gallery,
    Inquiry,
}

impl BoardType {
    pub const ALL: [BoardType; 4] = [Self::Notice, Self::Free, Self::Gallery, Self::Inquiry];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Free => "free",
            Self::Gallery => "gallery",
            Self::Inquiry => "inquiry",
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board type: {0}")]
pub struct UnknownBoardType(pub String);

impl FromStr for BoardType {
    type Err = UnknownBoardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownBoardType(s.to_owned()))
    }
}

// =============================================================================
// AUTH / MEMBER
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub member_id: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub member_id: String,
    pub member_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub member_id: String,
    pub password: String,
    pub member_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub member_id: String,
    #[serde(default)]
    pub member_name: Option<String>,
}

// =============================================================================
// CATEGORY / BOARD
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i32,
    pub category_name: String,
}

/// A board post as returned by list and detail endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub board_id: i64,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub author_type: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub edited_at: Option<String>,
    /// Board-kind specific fields (files, thumbnails, answers, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Spring-style page envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// List filters, sent as query parameters. Unset filters are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// `-1` selects every category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    pub order_value: String,
    pub order_direction: String,
    pub page_num: u32,
    pub page_size: u32,
    /// Inquiry board only: restrict to the caller's own inquiries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my: Option<bool>,
}

impl Default for SearchCondition {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            category: None,
            search_text: None,
            order_value: "createdAt".to_owned(),
            order_direction: "DESC".to_owned(),
            page_num: 0,
            page_size: 10,
            my: None,
        }
    }
}

/// A file attached to a board form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Fields for creating or editing a post. Sent as `multipart/form-data`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardForm {
    pub category_id: Option<i32>,
    pub title: String,
    pub content: String,
    pub files: Vec<Attachment>,
}

impl BoardForm {
    #[must_use]
    pub fn into_multipart(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new()
            .text("title", self.title)
            .text("content", self.content);
        if let Some(category_id) = self.category_id {
            form = form.text("categoryId", category_id.to_string());
        }
        for file in self.files {
            let part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name);
            form = form.part("files", part);
        }
        form
    }
}

// =============================================================================
// COMMENT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub board_type: BoardType,
    pub board_id: i64,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    #[serde(default)]
    pub board_type: Option<String>,
    #[serde(default)]
    pub board_id: Option<i64>,
    #[serde(default)]
    pub author_type: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
