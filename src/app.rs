//! Application root: builds the shared state and wires the pieces together.
//!
//! DESIGN
//! ======
//! One `AuthState` is shared by the bearer interceptor and the router. The
//! router doubles as the dispatcher's navigator, so recovery navigation
//! passes through the same guard as user navigation.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::net::client::{ApiClient, BearerAuth};
use crate::net::error::ApiError;
use crate::net::types::AuthResponse;
use crate::recovery::ErrorDispatcher;
use crate::routes::RouteError;
use crate::routes::router::{Navigation, Router};
use crate::services;
use crate::state::auth::AuthState;
use crate::ui::Notifier;

#[derive(Clone)]
pub struct App {
    pub auth: AuthState,
    pub router: Router,
    pub dispatcher: ErrorDispatcher,
    pub api: ApiClient,
}

impl App {
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ApiError> {
        let auth = AuthState::new();
        let router = Router::new(auth.clone(), notifier.clone());
        let dispatcher = ErrorDispatcher::new(notifier, Arc::new(router.clone()));
        let api = ApiClient::new(config)?
            .with_request_interceptor(Arc::new(BearerAuth::new(auth.clone())))
            .with_response_interceptor(Arc::new(dispatcher.clone()));
        Ok(Self { auth, router, dispatcher, api })
    }

    /// Log in and store the session.
    ///
    /// # Errors
    ///
    /// Propagates the login failure; the session is left unchanged.
    pub async fn login(&self, member_id: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = services::auth::login(&self.api, member_id, password).await?;
        self.auth.login(&response);
        Ok(response)
    }

    pub fn logout(&self) {
        self.auth.clear_session();
    }

    /// Navigate to `path` through the guard.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unmatched`] for unknown paths.
    pub fn navigate(&self, path: &str) -> Result<Navigation, RouteError> {
        self.router.push_path(path)
    }
}
