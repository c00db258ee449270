//! Login form.

use vouch_client::{ApiError, Credentials};
use vouch_core::validation;

use super::{FocusMove, Outcome, cycle};
use crate::{Alert, KeyInput, Route, TextInput};

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    /// Email field.
    #[default]
    Email,
    /// Password field.
    Password,
    /// Sign In button.
    Submit,
    /// Link to the signup screen.
    CreateAccount,
}

impl LoginFocus {
    const ORDER: [Self; 4] = [Self::Email, Self::Password, Self::Submit, Self::CreateAccount];
}

/// Login screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    focus: LoginFocus,
    in_progress: bool,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::masked(),
            focus: LoginFocus::default(),
            in_progress: false,
        }
    }
}

impl LoginScreen {
    /// Email field.
    pub fn email(&self) -> &TextInput {
        &self.email
    }

    /// Password field.
    pub fn password(&self) -> &TextInput {
        &self.password
    }

    /// Focused control.
    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    /// A login request is outstanding.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub(crate) fn handle_key(&mut self, key: KeyInput) -> Outcome {
        if let Some(step) = FocusMove::from_key(key) {
            self.focus = cycle(&LoginFocus::ORDER, self.focus, step);
            return Outcome::Redraw;
        }

        match (self.focus, key) {
            (LoginFocus::Email, KeyInput::Enter) => {
                self.focus = LoginFocus::Password;
                Outcome::Redraw
            },
            (LoginFocus::Password | LoginFocus::Submit, KeyInput::Enter) => self.submit(),
            (LoginFocus::CreateAccount, KeyInput::Enter) => Outcome::Navigate(Route::Signup),
            (LoginFocus::Email, key) => {
                self.email.handle_key(key);
                Outcome::Redraw
            },
            (LoginFocus::Password, key) => {
                self.password.handle_key(key);
                Outcome::Redraw
            },
            (LoginFocus::Submit | LoginFocus::CreateAccount, _) => Outcome::Redraw,
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.in_progress {
            return Outcome::Redraw;
        }

        if self.email.is_empty() || self.password.is_empty() {
            return Outcome::Alert(Alert::new(
                "Missing Fields",
                "Please enter both email and password.",
            ));
        }

        if validation::validate_email(self.email.value()).is_err() {
            return Outcome::Alert(Alert::new(
                "Invalid Email",
                "Please enter a valid email address.",
            ));
        }

        self.in_progress = true;
        Outcome::Login(Credentials {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })
    }

    /// Clear the in-progress flag. Returns whether a request was outstanding.
    pub(crate) fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.in_progress, false)
    }
}

/// User-facing explanation of a failed login.
pub fn login_failure_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        return "Invalid credentials. Please check your email and password.".into();
    }
    if let Some(message) = err.server_message() {
        return message.to_string();
    }
    if err.is_network() {
        return "Network error. Please check your internet connection.".into();
    }
    "Something went wrong. Please try again.".into()
}
