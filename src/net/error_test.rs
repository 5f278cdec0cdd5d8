use super::*;
use serde_json::json;

// =============================================================
// ApiError::from_status
// =============================================================

#[test]
fn from_status_parses_json_body() {
    let err = ApiError::from_status(404, br#"{"code":"A001","message":"not found","status":404}"#);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.error_code(), Some("A001"));
}

#[test]
fn from_status_empty_body_is_absent() {
    let err = ApiError::from_status(500, b"   ");
    let ApiError::Status { body, .. } = &err else {
        panic!("expected status error");
    };
    assert!(body.is_none());
    assert!(err.error_code().is_none());
}

#[test]
fn from_status_keeps_non_json_text() {
    let err = ApiError::from_status(502, b"<html>bad gateway</html>");
    let ApiError::Status { body, raw, .. } = &err else {
        panic!("expected status error");
    };
    assert_eq!(body.as_ref(), Some(&json!("<html>bad gateway</html>")));
    assert_eq!(raw, "<html>bad gateway</html>");
    assert!(err.error_code().is_none());
}

#[test]
fn status_error_display_names_status() {
    assert_eq!(ApiError::from_status(403, b"").to_string(), "API responded with status 403");
}

#[test]
fn save_file_error_names_path() {
    let err = ApiError::SaveFile {
        path: PathBuf::from("/tmp/x.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "failed to save /tmp/x.txt: denied");
    assert!(err.status().is_none());
}

// =============================================================
// ErrorSignal
// =============================================================

#[test]
fn signal_from_status_error_carries_code_and_message() {
    let err = ApiError::from_status(403, br#"{"code":"A006","message":"not yours"}"#);
    let signal = ErrorSignal::from_error(&err);
    assert!(signal.has_body);
    assert_eq!(signal.code.as_deref(), Some("A006"));
    assert_eq!(signal.message.as_deref(), Some("not yours"));
}

#[test]
fn signal_from_bodyless_status_has_no_body() {
    let signal = ErrorSignal::from_error(&ApiError::from_status(500, b""));
    assert!(!signal.has_body);
    assert!(signal.code.is_none());
    assert_eq!(signal.raw, "API responded with status 500");
}

#[test]
fn signal_ignores_non_string_code() {
    let body = json!({ "code": 1, "message": ["x"] });
    let signal = ErrorSignal::from_body(Some(&body), "raw");
    assert!(signal.has_body);
    assert!(signal.code.is_none());
    assert!(signal.message.is_none());
}

#[test]
fn signal_from_non_object_body_has_no_code() {
    let body = json!("plain text");
    let signal = ErrorSignal::from_body(Some(&body), "raw");
    assert!(signal.has_body);
    assert!(signal.code.is_none());
}

#[test]
fn signal_from_decode_error_has_no_body() {
    let decode = serde_json::from_str::<Value>("{").unwrap_err();
    let signal = ErrorSignal::from_error(&ApiError::Decode(decode));
    assert!(!signal.has_body);
    assert!(signal.raw.starts_with("response decode failed"));
}
