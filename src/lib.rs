//! # bulletin
//!
//! Client core for the bulletin-board site: notices, free board, gallery
//! and inquiries.
//!
//! This crate holds the session state, the route table with its auth guard,
//! the HTTP client with its interceptor pipeline, the backend error-code
//! dispatcher, and thin per-resource service calls. Views are not part of
//! this crate; anything that renders talks to it through the [`ui`] seams.

pub mod app;
pub mod config;
pub mod net;
pub mod recovery;
pub mod routes;
pub mod services;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::App;
pub use config::ClientConfig;
pub use net::client::ApiClient;
pub use net::error::{ApiError, ErrorSignal};
pub use recovery::{ErrorDispatcher, RecoveryAction};
pub use routes::router::Router;
pub use state::auth::{AuthState, Session};
