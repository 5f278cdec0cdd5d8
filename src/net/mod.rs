//! HTTP plumbing for the board API: wire DTOs, the error taxonomy, and the
//! interceptor-driven client.

pub mod client;
pub mod error;
pub mod types;
