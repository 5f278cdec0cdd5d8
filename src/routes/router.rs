//! Navigation with guard evaluation and history.
//!
//! DESIGN
//! ======
//! `push` holds the history lock while it reads the session, evaluates the
//! guard and records the landing location, so concurrent navigations are
//! serialized and each is guarded exactly once. The login notice is shown
//! after the lock is released.
//!
//! History keeps the most recent [`HISTORY_LIMIT`] landings; older entries
//! are dropped.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use super::guard::{self, GuardDecision};
use super::{Location, RouteError, RouteName};
use crate::state::auth::AuthState;
use crate::ui::{Navigator, Notifier};

/// Landings kept in history.
pub const HISTORY_LIMIT: usize = 64;

/// Result of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub requested: Location,
    pub landed: Location,
    pub decision: GuardDecision,
}

impl Navigation {
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        matches!(self.decision, GuardDecision::Redirected { .. })
    }
}

#[derive(Clone)]
pub struct Router {
    auth: AuthState,
    notifier: Arc<dyn Notifier>,
    history: Arc<Mutex<VecDeque<Location>>>,
}

impl Router {
    #[must_use]
    pub fn new(auth: AuthState, notifier: Arc<dyn Notifier>) -> Self {
        Self { auth, notifier, history: Arc::new(Mutex::new(VecDeque::with_capacity(HISTORY_LIMIT))) }
    }

    /// Navigate to `target`, or to Login if the guard redirects.
    pub fn push(&self, target: Location) -> Navigation {
        let navigation = {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            let decision = guard::evaluate(target.route(), &self.auth.snapshot());
            let landed = match decision {
                GuardDecision::Allowed => target.clone(),
                // Redirect targets are parameterless routes.
                GuardDecision::Redirected { to, .. } => Location::named(to).unwrap_or_else(|_| target.clone()),
            };
            if history.len() == HISTORY_LIMIT {
                history.pop_front();
            }
            history.push_back(landed.clone());
            Navigation { requested: target, landed, decision }
        };

        match navigation.decision {
            GuardDecision::Allowed => tracing::debug!(path = %navigation.landed, "navigation allowed"),
            GuardDecision::Redirected { to, notice } => {
                tracing::warn!(requested = %navigation.requested, redirect = %to, "navigation redirected");
                self.notifier.alert(notice);
            }
        }
        navigation
    }

    /// Resolve `path` and navigate to it.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unmatched`] for unknown paths; history is left
    /// untouched.
    pub fn push_path(&self, path: &str) -> Result<Navigation, RouteError> {
        let target = super::resolve(path)?;
        Ok(self.push(target))
    }

    #[must_use]
    pub fn current(&self) -> Option<Location> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).back().cloned()
    }

    /// Recent landings, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<Location> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner).iter().cloned().collect()
    }
}

impl Navigator for Router {
    fn navigate(&self, route: RouteName) {
        match Location::named(route) {
            Ok(target) => {
                self.push(target);
            }
            Err(err) => tracing::error!(error = %err, "programmatic navigation rejected"),
        }
    }
}
