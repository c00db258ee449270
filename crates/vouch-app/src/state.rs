//! Observable application state types.
//!
//! [`Route`] names the screen being shown and [`Alert`] is the modal feedback
//! shown on top of it.

use std::fmt;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Email and password form.
    Login,
    /// Account creation form.
    Signup,
    /// Profile editor. Only reachable with a session.
    Profile,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Profile => "profile",
        })
    }
}

/// Modal message. While shown, it captures all keys until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Screen to show once dismissed. `None` stays on the current screen.
    pub on_dismiss: Option<Route>,
}

impl Alert {
    /// Alert that leaves the current screen in place.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into(), on_dismiss: None }
    }

    /// Navigate to `route` when dismissed.
    #[must_use]
    pub fn then(mut self, route: Route) -> Self {
        self.on_dismiss = Some(route);
        self
    }
}
