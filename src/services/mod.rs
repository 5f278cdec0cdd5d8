//! Per-resource API calls.
//!
//! Each function performs one HTTP call through [`crate::ApiClient`] and
//! returns its payload. Failures are left to the client's interceptor
//! pipeline and propagate unchanged.

pub mod auth;
pub mod board;
pub mod category;
pub mod comment;
pub mod file;
