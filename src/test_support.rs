//! Shared test doubles: recording UI seams and a local mock API server.

use std::sync::{Arc, Mutex};

use crate::routes::RouteName;
use crate::ui::{Navigator, Notifier};

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("notifier mutex should lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().expect("notifier mutex should lock").push(message.to_owned());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<RouteName>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn routes(&self) -> Vec<RouteName> {
        self.routes.lock().expect("navigator mutex should lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: RouteName) {
        self.routes.lock().expect("navigator mutex should lock").push(route);
    }
}

/// Serve `app` under `/api` on an ephemeral local port and return the base
/// URL to point a client at.
pub async fn spawn_api(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("mock API should bind");
    let addr = listener.local_addr().expect("mock API should have an address");
    let app = axum::Router::new().nest("/api", app);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock API should serve");
    });
    format!("http://{addr}/api")
}
