use super::*;
use crate::test_support::{RecordingNavigator, RecordingNotifier};
use serde_json::json;

fn coded(code: &str) -> ErrorSignal {
    ErrorSignal::from_body(Some(&json!({ "code": code, "message": "server says no" })), "raw error")
}

fn dispatcher() -> (ErrorDispatcher, Arc<RecordingNotifier>, Arc<RecordingNavigator>) {
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    (ErrorDispatcher::new(notifier.clone(), navigator.clone()), notifier, navigator)
}

// =============================================================
// ApiErrorCode
// =============================================================

#[test]
fn error_code_parse_is_exact_match() {
    for code in ApiErrorCode::ALL {
        assert_eq!(ApiErrorCode::parse(code.as_str()), Some(code));
    }
    assert_eq!(ApiErrorCode::parse("a001"), None);
    assert_eq!(ApiErrorCode::parse(" A001"), None);
    assert_eq!(ApiErrorCode::parse("A004"), None);
}

#[test]
fn error_code_server_message_matches_backend() {
    assert_eq!(ApiErrorCode::MemberIdExisted.server_message(), "이미 존재하는 아이디입니다.");
}

// =============================================================
// recovery_for
// =============================================================

#[test]
fn not_found_codes_alert_and_go_main() {
    for code in ["A001", "A002", "A003"] {
        assert_eq!(
            recovery_for(&coded(code)),
            RecoveryAction::AlertAndRedirect { alert: NOT_FOUND_ALERT, to: RouteName::Main }
        );
    }
}

#[test]
fn only_not_found_codes_go_main() {
    let not_found = RecoveryAction::AlertAndRedirect { alert: NOT_FOUND_ALERT, to: RouteName::Main };
    for code in ApiErrorCode::ALL.into_iter().map(ApiErrorCode::as_str).chain(["A004", "X", ""]) {
        let expected = matches!(code, "A001" | "A002" | "A003");
        assert_eq!(recovery_for(&coded(code)) == not_found, expected, "code {code}");
    }
}

#[test]
fn not_logged_in_redirects_to_error_without_alert() {
    let action = recovery_for(&coded("A005"));
    assert_eq!(action, RecoveryAction::Redirect { to: RouteName::Error });
    assert_eq!(action.effects(), vec![Effect::Navigate(RouteName::Error)]);
}

#[test]
fn not_owner_only_logs() {
    let action = recovery_for(&coded("A006"));
    assert_eq!(action, RecoveryAction::LogOnly { message: NOT_OWNER_LOG.to_owned() });
}

#[test]
fn auth_failure_codes_log_server_message() {
    for code in ["A007", "A009", "A013", "A014"] {
        assert_eq!(
            recovery_for(&coded(code)),
            RecoveryAction::LogOnly { message: "로그인 실패: server says no".to_owned() }
        );
    }
}

#[test]
fn auth_failure_without_message_logs_backend_default() {
    let signal = ErrorSignal::from_body(Some(&json!({ "code": "A007" })), "raw");
    assert_eq!(
        recovery_for(&signal),
        RecoveryAction::LogOnly { message: "로그인 실패: 로그인에 실패했습니다.".to_owned() }
    );

    let signal = ErrorSignal::from_body(Some(&json!({ "code": "A009", "message": 7 })), "raw");
    assert_eq!(
        recovery_for(&signal),
        RecoveryAction::LogOnly { message: "로그인 실패: 이미 존재하는 아이디입니다.".to_owned() }
    );
}

#[test]
fn illegal_file_data_alerts_and_goes_error() {
    let action = recovery_for(&coded("A008"));
    assert_eq!(
        action.effects(),
        vec![Effect::Alert(ILLEGAL_FILE_ALERT.to_owned()), Effect::Navigate(RouteName::Error)]
    );
}

#[test]
fn missing_body_is_generic() {
    let action = recovery_for(&ErrorSignal::without_body("connection refused"));
    assert_eq!(
        action,
        RecoveryAction::AlertAndLog { alert: GENERIC_ALERT, message: "에러 발생: connection refused".to_owned() }
    );
}

#[test]
fn unrecognized_or_malformed_codes_are_generic() {
    let cases = [
        json!({ "code": "A999" }),
        json!({ "code": "A015" }),
        json!({ "code": "A016" }),
        json!({ "code": 404 }),
        json!({ "message": "no code" }),
        json!("just text"),
        json!(null),
    ];
    for body in cases {
        let action = recovery_for(&ErrorSignal::from_body(Some(&body), "raw"));
        assert!(
            matches!(action, RecoveryAction::AlertAndLog { alert: GENERIC_ALERT, .. }),
            "body {body} should be generic"
        );
    }
}

// =============================================================
// ErrorDispatcher
// =============================================================

#[test]
fn dispatch_not_found_alerts_then_navigates_main() {
    let (dispatcher, notifier, navigator) = dispatcher();
    dispatcher.dispatch(&coded("A002"));
    assert_eq!(notifier.alerts(), vec![NOT_FOUND_ALERT.to_owned()]);
    assert_eq!(navigator.routes(), vec![RouteName::Main]);
}

#[test]
fn dispatch_not_owner_has_no_ui_effects() {
    let (dispatcher, notifier, navigator) = dispatcher();
    let action = dispatcher.dispatch(&coded("A006"));
    assert_eq!(action, RecoveryAction::LogOnly { message: NOT_OWNER_LOG.to_owned() });
    assert!(notifier.alerts().is_empty());
    assert!(navigator.routes().is_empty());
}

#[test]
fn dispatch_without_body_alerts_generic_message() {
    let (dispatcher, notifier, navigator) = dispatcher();
    let action = dispatcher.dispatch(&ErrorSignal::without_body("timeout"));
    assert_eq!(notifier.alerts(), vec!["오류가 발생했습니다.".to_owned()]);
    assert!(navigator.routes().is_empty());
    assert!(matches!(action, RecoveryAction::AlertAndLog { ref message, .. } if message.contains("timeout")));
}

#[test]
fn dispatch_executes_exactly_once_per_call() {
    let (dispatcher, notifier, navigator) = dispatcher();
    dispatcher.dispatch(&coded("A008"));
    dispatcher.dispatch(&coded("A008"));
    assert_eq!(notifier.alerts().len(), 2);
    assert_eq!(navigator.routes(), vec![RouteName::Error, RouteName::Error]);
}

#[test]
fn interceptor_hook_dispatches_status_errors() {
    let (dispatcher, notifier, navigator) = dispatcher();
    let err = ApiError::from_status(404, br#"{"code":"A001","message":"gone"}"#);
    dispatcher.on_error(&err);
    assert_eq!(notifier.alerts(), vec![NOT_FOUND_ALERT.to_owned()]);
    assert_eq!(navigator.routes(), vec![RouteName::Main]);
}
