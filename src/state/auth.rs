//! Auth-session state for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the bearer-token interceptor on every outgoing request and by the
//! navigation guard before every route transition. Written only through
//! [`AuthState::set_session`] and [`AuthState::clear_session`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, PoisonError, RwLock};

use crate::net::types::AuthResponse;

/// Snapshot of the current login session.
///
/// Fields are private so a session can only be fully logged in or fully
/// logged out: `is_logged_in()` is true iff a token is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    member_id: Option<String>,
    member_name: Option<String>,
    logged_in: bool,
}

impl Session {
    /// Build a fully logged-in session.
    #[must_use]
    pub fn logged_in(token: impl Into<String>, member_id: impl Into<String>, member_name: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            member_id: Some(member_id.into()),
            member_name: Some(member_name.into()),
            logged_in: true,
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn member_id(&self) -> Option<&str> {
        self.member_id.as_deref()
    }

    #[must_use]
    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }
}

/// Shared, cloneable handle to the current [`Session`].
///
/// Clones observe the same session, and a mutation is visible to the next
/// read from any clone. A request already in flight keeps whatever token it
/// was built with.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    inner: Arc<RwLock<Session>>,
}

impl AuthState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session with a fully logged-in one.
    pub fn set_session(&self, token: impl Into<String>, member_id: impl Into<String>, member_name: impl Into<String>) {
        let session = Session::logged_in(token, member_id, member_name);
        tracing::info!(member_id = session.member_id().unwrap_or_default(), "session established");
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    /// Store the session carried by a successful login response.
    pub fn login(&self, response: &AuthResponse) {
        self.set_session(&response.access_token, &response.member_id, &response.member_name);
    }

    /// Reset to the logged-out state.
    pub fn clear_session(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Session::default();
        tracing::info!("session cleared");
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).is_logged_in()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token()
            .map(str::to_owned)
    }

    #[must_use]
    pub fn member_id(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .member_id()
            .map(str::to_owned)
    }

    #[must_use]
    pub fn member_name(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .member_name()
            .map(str::to_owned)
    }
}
