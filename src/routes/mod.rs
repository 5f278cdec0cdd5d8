//! Page routes, path resolution and the auth guard.
//!
//! DESIGN
//! ======
//! The route table is static data. Resolution prefers literal segments over
//! `:id` parameters, so `/boards/free/write` resolves to the write page
//! rather than to a post whose id is `write`. Guard evaluation and history
//! live in [`router`]; the guard rule itself is the pure function in
//! [`guard`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub mod guard;
pub mod router;

use std::fmt;


const ID_PARAM: &str = ":id";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches {0}")]
    Unmatched(String),
    #[error("route {0} requires an id")]
    MissingId(RouteName),
    #[error("route {0} takes no id")]
    UnexpectedId(RouteName),
}

/// Named pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Main,
    Login,
    Join,
    NoticeList,
    NoticeView,
    FreeList,
    FreeView,
    FreeWrite,
    FreeModify,
    GalleryList,
    GalleryView,
    GalleryWrite,
    GalleryModify,
    InquiryList,
    InquiryView,
    InquiryWrite,
    InquiryModify,
    Error,
}

impl RouteName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Login => "Login",
            Self::Join => "Join",
            Self::NoticeList => "NoticeList",
            Self::NoticeView => "NoticeView",
            Self::FreeList => "FreeList",
            Self::FreeView => "FreeView",
            Self::FreeWrite => "FreeWrite",
            Self::FreeModify => "FreeModify",
            Self::GalleryList => "GalleryList",
            Self::GalleryView => "GalleryView",
            Self::GalleryWrite => "GalleryWrite",
            Self::GalleryModify => "GalleryModify",
            Self::InquiryList => "InquiryList",
            Self::InquiryView => "InquiryView",
            Self::InquiryWrite => "InquiryWrite",
            Self::InquiryModify => "InquiryModify",
            Self::Error => "Error",
        }
    }

    /// The table entry for this name.
    #[must_use]
    pub fn route(self) -> &'static Route {
        // Every variant has exactly one entry in ROUTES.
        ROUTES.iter().find(|route| route.name == self).unwrap_or(&ROUTES[0])
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the route table.
#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
}

impl Route {
    const fn open(path: &'static str, name: RouteName) -> Self {
        Self { path, name, requires_auth: false }
    }

    const fn protected(path: &'static str, name: RouteName) -> Self {
        Self { path, name, requires_auth: true }
    }

    #[must_use]
    pub fn has_id(&self) -> bool {
        self.path.split('/').any(|segment| segment == ID_PARAM)
    }
}

pub static ROUTES: &[Route] = &[
    Route::open("/", RouteName::Main),
    Route::open("/login", RouteName::Login),
    Route::open("/join", RouteName::Join),
    Route::open("/boards/notice", RouteName::NoticeList),
    Route::open("/boards/notice/:id", RouteName::NoticeView),
    Route::open("/boards/free", RouteName::FreeList),
    Route::open("/boards/free/:id", RouteName::FreeView),
    Route::protected("/boards/free/write", RouteName::FreeWrite),
    Route::protected("/boards/free/modify/:id", RouteName::FreeModify),
    Route::open("/boards/gallery", RouteName::GalleryList),
    Route::open("/boards/gallery/:id", RouteName::GalleryView),
    Route::protected("/boards/gallery/write", RouteName::GalleryWrite),
    Route::protected("/boards/gallery/modify/:id", RouteName::GalleryModify),
    Route::open("/boards/inquiry", RouteName::InquiryList),
    Route::protected("/boards/inquiry/:id", RouteName::InquiryView),
    Route::protected("/boards/inquiry/write", RouteName::InquiryWrite),
    Route::protected("/boards/inquiry/modify/:id", RouteName::InquiryModify),
    Route::open("/error", RouteName::Error),
];

/// A concrete place in the app: a route plus its `:id`, if the route has one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    route: &'static Route,
    id: Option<String>,
}

impl Location {
    /// Location of a route without parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingId`] if the route needs an id.
    pub fn named(name: RouteName) -> Result<Self, RouteError> {
        Self::new(name, None)
    }

    /// # Errors
    ///
    /// Returns an error when `id` is given for a route without `:id`, or
    /// missing for a route with one.
    pub fn new(name: RouteName, id: Option<String>) -> Result<Self, RouteError> {
        let route = name.route();
        match (route.has_id(), id.is_some()) {
            (true, false) => Err(RouteError::MissingId(name)),
            (false, true) => Err(RouteError::UnexpectedId(name)),
            _ => Ok(Self { route, id }),
        }
    }

    #[must_use]
    pub fn route(&self) -> &'static Route {
        self.route
    }

    #[must_use]
    pub fn name(&self) -> RouteName {
        self.route.name
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Concrete path with `:id` filled in.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.id {
            Some(id) => self.route.path.replace(ID_PARAM, id),
            None => self.route.path.to_owned(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Map a browser path to a [`Location`].
///
/// # Errors
///
/// Returns [`RouteError::Unmatched`] when no route fits.
pub fn resolve(path: &str) -> Result<Location, RouteError> {
    let trimmed = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

    let mut param_match = None;
    for route in ROUTES {
        match match_route(route, &segments) {
            Some(None) => return Ok(Location { route, id: None }),
            Some(Some(id)) if param_match.is_none() => param_match = Some(Location { route, id: Some(id) }),
            _ => {}
        }
    }
    param_match.ok_or_else(|| RouteError::Unmatched(path.to_owned()))
}

/// `None` on mismatch, `Some(None)` on a literal match, `Some(Some(id))`
/// when the `:id` segment captured a value.
fn match_route(route: &Route, segments: &[&str]) -> Option<Option<String>> {
    let pattern: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern.len() != segments.len() {
        return None;
    }
    let mut id = None;
    for (expected, actual) in pattern.iter().zip(segments) {
        if *expected == ID_PARAM {
            id = Some((*actual).to_owned());
        } else if expected != actual {
            return None;
        }
    }
    Some(id)
}
