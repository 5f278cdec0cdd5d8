//! Backend error codes mapped to client-side recovery actions.
//!
//! DESIGN
//! ======
//! Choosing an action is a pure function of the [`ErrorSignal`]
//! ([`recovery_for`]); performing it is a separate step
//! ([`ErrorDispatcher::execute`]). [`ErrorDispatcher::dispatch`] always pairs
//! the two one-to-one. Execution only alerts, navigates and logs, so it
//! cannot fail, and it never swallows the original error: the failed call
//! still resolves as `Err` for its caller.

#[cfg(test)]
#[path = "recovery_test.rs"]
mod recovery_test;

use std::sync::Arc;

use crate::net::client::ResponseInterceptor;
use crate::net::error::{ApiError, ErrorSignal};
use crate::routes::RouteName;
use crate::ui::{Navigator, Notifier};

pub const NOT_FOUND_ALERT: &str = "존재하지 않는 게시물입니다.";
pub const ILLEGAL_FILE_ALERT: &str = "잘못된 파일 데이터입니다.";
pub const GENERIC_ALERT: &str = "오류가 발생했습니다.";
pub const NOT_OWNER_LOG: &str = "본인의 게시물이 아닙니다.";

// =============================================================================
// ERROR CODES
// =============================================================================

/// Error codes the backend emits, with its default messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    BoardNotFound,
    FileNotFound,
    MemberNotFound,
    NotLoggedIn,
    NotMyBoard,
    LoginFail,
    IllegalFileData,
    MemberIdExisted,
    IllegalBoardData,
    JoinFail,
    CommentNotFound,
    NotMyComment,
}

impl ApiErrorCode {
    pub const ALL: [ApiErrorCode; 12] = [
        Self::BoardNotFound,
        Self::FileNotFound,
        Self::MemberNotFound,
        Self::NotLoggedIn,
        Self::NotMyBoard,
        Self::LoginFail,
        Self::IllegalFileData,
        Self::MemberIdExisted,
        Self::IllegalBoardData,
        Self::JoinFail,
        Self::CommentNotFound,
        Self::NotMyComment,
    ];

    /// Exact-match lookup; anything else is unrecognized.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BoardNotFound => "A001",
            Self::FileNotFound => "A002",
            Self::MemberNotFound => "A003",
            Self::NotLoggedIn => "A005",
            Self::NotMyBoard => "A006",
            Self::LoginFail => "A007",
            Self::IllegalFileData => "A008",
            Self::MemberIdExisted => "A009",
            Self::IllegalBoardData => "A013",
            Self::JoinFail => "A014",
            Self::CommentNotFound => "A015",
            Self::NotMyComment => "A016",
        }
    }

    /// The message the backend pairs with this code. Used in logs when the
    /// error body carries no message of its own.
    #[must_use]
    pub fn server_message(self) -> &'static str {
        match self {
            Self::BoardNotFound => "게시물을 찾을 수 없습니다.",
            Self::FileNotFound => "파일을 찾을 수 없습니다.",
            Self::MemberNotFound => "회원을 찾을 수 없습니다.",
            Self::NotLoggedIn => "로그인이 필요합니다.",
            Self::NotMyBoard => "본인의 게시물이 아닙니다.",
            Self::LoginFail => "로그인에 실패했습니다.",
            Self::IllegalFileData => "잘못된 파일 데이터입니다.",
            Self::MemberIdExisted => "이미 존재하는 아이디입니다.",
            Self::IllegalBoardData => "잘못된 게시물 데이터입니다.",
            Self::JoinFail => "회원가입에 실패했습니다.",
            Self::CommentNotFound => "댓글을 찾을 수 없습니다.",
            Self::NotMyComment => "본인의 댓글이 아닙니다.",
        }
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A single side effect of a recovery action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Alert(String),
    Navigate(RouteName),
    Log { severity: Severity, message: String },
}

/// What to do about one failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    AlertAndRedirect { alert: &'static str, to: RouteName },
    Redirect { to: RouteName },
    LogOnly { message: String },
    AlertAndLog { alert: &'static str, message: String },
}

impl RecoveryAction {
    /// Effects in execution order: alert before navigation, log before alert.
    #[must_use]
    pub fn effects(&self) -> Vec<Effect> {
        match self {
            Self::AlertAndRedirect { alert, to } => vec![Effect::Alert((*alert).to_owned()), Effect::Navigate(*to)],
            Self::Redirect { to } => vec![Effect::Navigate(*to)],
            Self::LogOnly { message } => vec![Effect::Log { severity: Severity::Info, message: message.clone() }],
            Self::AlertAndLog { alert, message } => vec![
                Effect::Log { severity: Severity::Error, message: message.clone() },
                Effect::Alert((*alert).to_owned()),
            ],
        }
    }
}

/// Select the recovery action for a failed call. Total over every input.
#[must_use]
pub fn recovery_for(signal: &ErrorSignal) -> RecoveryAction {
    if !signal.has_body {
        return generic(signal);
    }
    match signal.code.as_deref().and_then(ApiErrorCode::parse) {
        Some(ApiErrorCode::BoardNotFound | ApiErrorCode::FileNotFound | ApiErrorCode::MemberNotFound) => {
            RecoveryAction::AlertAndRedirect { alert: NOT_FOUND_ALERT, to: RouteName::Main }
        }
        Some(ApiErrorCode::NotLoggedIn) => RecoveryAction::Redirect { to: RouteName::Error },
        Some(ApiErrorCode::NotMyBoard) => RecoveryAction::LogOnly { message: NOT_OWNER_LOG.to_owned() },
        Some(
            code @ (ApiErrorCode::LoginFail
            | ApiErrorCode::MemberIdExisted
            | ApiErrorCode::IllegalBoardData
            | ApiErrorCode::JoinFail),
        ) => {
            let message = signal.message.as_deref().unwrap_or(code.server_message());
            RecoveryAction::LogOnly { message: format!("로그인 실패: {message}") }
        }
        Some(ApiErrorCode::IllegalFileData) => {
            RecoveryAction::AlertAndRedirect { alert: ILLEGAL_FILE_ALERT, to: RouteName::Error }
        }
        Some(ApiErrorCode::CommentNotFound | ApiErrorCode::NotMyComment) | None => generic(signal),
    }
}

fn generic(signal: &ErrorSignal) -> RecoveryAction {
    RecoveryAction::AlertAndLog { alert: GENERIC_ALERT, message: format!("에러 발생: {}", signal.raw) }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Executes recovery actions against the UI seams.
#[derive(Clone)]
pub struct ErrorDispatcher {
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ErrorDispatcher {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self { notifier, navigator }
    }

    /// Select and execute the action for `signal`, returning it.
    pub fn dispatch(&self, signal: &ErrorSignal) -> RecoveryAction {
        let action = recovery_for(signal);
        tracing::debug!(code = signal.code.as_deref().unwrap_or("-"), ?action, "dispatching recovery");
        self.execute(&action);
        action
    }

    pub fn execute(&self, action: &RecoveryAction) {
        for effect in action.effects() {
            match effect {
                Effect::Alert(message) => self.notifier.alert(&message),
                Effect::Navigate(route) => self.navigator.navigate(route),
                Effect::Log { severity: Severity::Info, message } => tracing::info!("{message}"),
                Effect::Log { severity: Severity::Error, message } => tracing::error!("{message}"),
            }
        }
    }
}

impl ResponseInterceptor for ErrorDispatcher {
    fn on_error(&self, error: &ApiError) {
        self.dispatch(&ErrorSignal::from_error(error));
    }
}
