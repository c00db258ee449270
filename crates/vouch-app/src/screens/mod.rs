//! Screen state machines.
//!
//! Each screen owns its form fields, focus and busy flags. Screens never touch
//! the session or the backend; they turn keys and completions into an
//! [`Outcome`] that [`crate::App`] carries out.

mod login;
mod profile;
mod signup;

use std::path::PathBuf;

pub use login::{LoginFocus, LoginScreen, login_failure_message};
pub use profile::{ProfileFocus, ProfileScreen};
pub use signup::{SignupFocus, SignupScreen};
use vouch_client::{Credentials, SignupRequest};
use vouch_core::ProfileUpdate;

use crate::{Alert, KeyInput, Route};

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Login form.
    Login(LoginScreen),
    /// Signup form.
    Signup(SignupScreen),
    /// Profile editor.
    Profile(ProfileScreen),
}

impl Screen {
    /// Route of this screen.
    pub fn route(&self) -> Route {
        match self {
            Self::Login(_) => Route::Login,
            Self::Signup(_) => Route::Signup,
            Self::Profile(_) => Route::Profile,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyInput) -> Outcome {
        match self {
            Self::Login(screen) => screen.handle_key(key),
            Self::Signup(screen) => screen.handle_key(key),
            Self::Profile(screen) => screen.handle_key(key),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Login(LoginScreen::default())
    }
}

/// What a screen asks the app to do after handling a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// State changed locally (or not at all); redraw.
    Redraw,
    /// Show a modal.
    Alert(Alert),
    /// Replace the current screen.
    Navigate(Route),
    /// Request a login.
    Login(Credentials),
    /// Request account creation.
    Signup(SignupRequest),
    /// Request a profile update.
    Save(ProfileUpdate),
    /// Request an image upload.
    Upload(PathBuf),
    /// End the session.
    Logout,
}

/// Focus movement requested by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusMove {
    Next,
    Previous,
}

impl FocusMove {
    fn from_key(key: KeyInput) -> Option<Self> {
        match key {
            KeyInput::Tab | KeyInput::Down => Some(Self::Next),
            KeyInput::BackTab | KeyInput::Up => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Step through `order`, wrapping at both ends.
fn cycle<F: Copy + PartialEq>(order: &[F], current: F, step: FocusMove) -> F {
    let len = order.len();
    let Some(index) = order.iter().position(|f| *f == current) else {
        return current;
    };

    let next = match step {
        FocusMove::Next => (index + 1) % len,
        FocusMove::Previous => (index + len - 1) % len,
    };
    order.get(next).copied().unwrap_or(current)
}
