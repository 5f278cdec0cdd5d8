//! Seams between the client core and whatever presents it to the user.
//!
//! DESIGN
//! ======
//! The recovery actions and the navigation guard only need two things from
//! the presentation layer: a way to show a blocking notice and a way to move
//! to another page. Both are traits so a browser shell, the CLI driver and
//! tests can each supply their own.

use crate::routes::RouteName;

/// Shows a user-facing notice (the browser `alert` equivalent).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Moves the application to a named page.
///
/// Implementations must not fail outward; problems are logged.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: RouteName);
}

/// Notifier for terminal use: alerts go to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("[alert] {message}");
    }
}
