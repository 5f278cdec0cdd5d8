//! Auth guard run before every navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{Route, RouteName};
use crate::state::auth::Session;

pub const LOGIN_REQUIRED_NOTICE: &str = "로그인이 필요합니다.";

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    Redirected { to: RouteName, notice: &'static str },
}

/// Protected routes redirect logged-out users to Login; everything else
/// proceeds unchanged.
#[must_use]
pub fn evaluate(target: &Route, session: &Session) -> GuardDecision {
    if target.requires_auth && !session.is_logged_in() {
        GuardDecision::Redirected { to: RouteName::Login, notice: LOGIN_REQUIRED_NOTICE }
    } else {
        GuardDecision::Allowed
    }
}
