use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_static_paths() {
    assert_eq!(resolve("/").unwrap().name(), RouteName::Main);
    assert_eq!(resolve("/login").unwrap().name(), RouteName::Login);
    assert_eq!(resolve("/join").unwrap().name(), RouteName::Join);
    assert_eq!(resolve("/error").unwrap().name(), RouteName::Error);
    assert_eq!(resolve("/boards/gallery").unwrap().name(), RouteName::GalleryList);
}

#[test]
fn resolve_captures_id() {
    let location = resolve("/boards/notice/42").unwrap();
    assert_eq!(location.name(), RouteName::NoticeView);
    assert_eq!(location.id(), Some("42"));

    let location = resolve("/boards/inquiry/modify/9").unwrap();
    assert_eq!(location.name(), RouteName::InquiryModify);
    assert_eq!(location.id(), Some("9"));
}

#[test]
fn resolve_prefers_literal_write_over_id() {
    for (path, name) in [
        ("/boards/free/write", RouteName::FreeWrite),
        ("/boards/gallery/write", RouteName::GalleryWrite),
        ("/boards/inquiry/write", RouteName::InquiryWrite),
    ] {
        let location = resolve(path).unwrap();
        assert_eq!(location.name(), name);
        assert!(location.id().is_none());
    }
}

#[test]
fn resolve_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(resolve("/boards/free/?pageNum=2").unwrap().name(), RouteName::FreeList);
    assert_eq!(resolve("/boards/free/3#comments").unwrap().id(), Some("3"));
}

#[test]
fn resolve_rejects_unknown_paths() {
    assert_eq!(resolve("/admin"), Err(RouteError::Unmatched("/admin".into())));
    assert!(resolve("/boards/notice/write").is_ok_and(|l| l.name() == RouteName::NoticeView));
    assert!(resolve("/boards/notice/modify/1").is_err());
}

// =============================================================
// Location
// =============================================================

#[test]
fn location_requires_id_for_param_routes() {
    assert_eq!(Location::named(RouteName::FreeView), Err(RouteError::MissingId(RouteName::FreeView)));
    assert_eq!(
        Location::new(RouteName::Main, Some("1".into())),
        Err(RouteError::UnexpectedId(RouteName::Main))
    );
}

#[test]
fn location_path_fills_id() {
    let location = Location::new(RouteName::GalleryModify, Some("15".into())).unwrap();
    assert_eq!(location.path(), "/boards/gallery/modify/15");
    assert_eq!(Location::named(RouteName::Login).unwrap().to_string(), "/login");
}

#[test]
fn every_route_name_has_one_entry() {
    for route in ROUTES {
        assert_eq!(ROUTES.iter().filter(|r| r.name == route.name).count(), 1);
        assert_eq!(route.name.route().path, route.path);
    }
}
