use super::*;
use crate::routes::ROUTES;

fn logged_in() -> Session {
    Session::logged_in("tok", "u1", "Kim")
}

#[test]
fn protected_route_redirects_when_logged_out() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(
            evaluate(route, &Session::default()),
            GuardDecision::Redirected { to: RouteName::Login, notice: LOGIN_REQUIRED_NOTICE },
            "{} should redirect",
            route.name
        );
    }
}

#[test]
fn protected_route_allows_when_logged_in() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(evaluate(route, &logged_in()), GuardDecision::Allowed);
    }
}

#[test]
fn open_route_allows_regardless_of_session() {
    for route in ROUTES.iter().filter(|r| !r.requires_auth) {
        assert_eq!(evaluate(route, &Session::default()), GuardDecision::Allowed);
        assert_eq!(evaluate(route, &logged_in()), GuardDecision::Allowed);
    }
}

#[test]
fn inquiry_view_is_protected_but_notice_view_is_not() {
    assert!(RouteName::InquiryView.route().requires_auth);
    assert!(!RouteName::NoticeView.route().requires_auth);
}
