//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the App at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use vouch_app::{App, Route, Screen};
use vouch_core::Level;

/// Snapshot of what the user can see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSnapshot {
    /// Screen shown.
    pub route: Route,
    /// Session holds a token.
    pub authenticated: bool,
    /// Title of the open alert, if any.
    pub alert: Option<String>,
    /// A request started by the current screen is outstanding.
    pub busy: bool,
    /// Score shown in the profile header. `None` off the profile screen.
    pub score: Option<u8>,
    /// Level shown in the profile header. `None` off the profile screen.
    pub level: Option<Level>,
}

impl AppSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app(app: &App) -> Self {
        let (score, level) = match app.screen() {
            Screen::Profile(screen) => (Some(screen.score().value()), Some(screen.level())),
            Screen::Login(_) | Screen::Signup(_) => (None, None),
        };

        Self {
            route: app.route(),
            authenticated: app.session().is_authenticated(),
            alert: app.alert().map(|alert| alert.title.clone()),
            busy: app.is_busy(),
            score,
            level,
        }
    }

    /// Idle, signed-out snapshot on `route`.
    pub fn anonymous(route: Route) -> Self {
        Self { route, authenticated: false, alert: None, busy: false, score: None, level: None }
    }
}
