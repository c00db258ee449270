//! Signup form with live validation.

use vouch_client::SignupRequest;
use vouch_core::{ValidationError, validation};

use super::{FocusMove, Outcome, cycle};
use crate::{Alert, KeyInput, Route, TextInput};

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFocus {
    /// Name field.
    #[default]
    Name,
    /// Email field.
    Email,
    /// Password field.
    Password,
    /// Create Account button.
    Submit,
    /// Link back to the login screen.
    LogIn,
}

impl SignupFocus {
    const ORDER: [Self; 5] = [Self::Name, Self::Email, Self::Password, Self::Submit, Self::LogIn];
}

/// Signup screen state.
///
/// Each field is validated as it is edited; the resulting message is kept
/// until the next edit of that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupScreen {
    name: TextInput,
    email: TextInput,
    password: TextInput,
    name_error: Option<ValidationError>,
    email_error: Option<ValidationError>,
    password_error: Option<ValidationError>,
    focus: SignupFocus,
    in_progress: bool,
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self {
            name: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::masked(),
            name_error: None,
            email_error: None,
            password_error: None,
            focus: SignupFocus::default(),
            in_progress: false,
        }
    }
}

impl SignupScreen {
    /// Name field.
    pub fn name(&self) -> &TextInput {
        &self.name
    }

    /// Email field.
    pub fn email(&self) -> &TextInput {
        &self.email
    }

    /// Password field.
    pub fn password(&self) -> &TextInput {
        &self.password
    }

    /// Inline message for the name field.
    pub fn name_error(&self) -> Option<ValidationError> {
        self.name_error
    }

    /// Inline message for the email field.
    pub fn email_error(&self) -> Option<ValidationError> {
        self.email_error
    }

    /// Inline message for the password field.
    pub fn password_error(&self) -> Option<ValidationError> {
        self.password_error
    }

    /// Focused control.
    pub fn focus(&self) -> SignupFocus {
        self.focus
    }

    /// A signup request is outstanding.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub(crate) fn handle_key(&mut self, key: KeyInput) -> Outcome {
        if let Some(step) = FocusMove::from_key(key) {
            self.focus = cycle(&SignupFocus::ORDER, self.focus, step);
            return Outcome::Redraw;
        }

        match (self.focus, key) {
            (SignupFocus::Name | SignupFocus::Email | SignupFocus::Password, KeyInput::Enter) => {
                self.focus = cycle(&SignupFocus::ORDER, self.focus, FocusMove::Next);
            },
            (SignupFocus::Submit, KeyInput::Enter) => return self.submit(),
            (SignupFocus::LogIn, KeyInput::Enter) => return Outcome::Navigate(Route::Login),
            (SignupFocus::Name, key) => {
                if self.name.handle_key(key) {
                    self.name_error = validation::validate_name(self.name.value()).err();
                }
            },
            (SignupFocus::Email, key) => {
                if self.email.handle_key(key) {
                    self.email_error = validation::validate_email(self.email.value()).err();
                }
            },
            (SignupFocus::Password, key) => {
                if self.password.handle_key(key) {
                    self.password_error =
                        validation::validate_password(self.password.value()).err();
                }
            },
            (SignupFocus::Submit | SignupFocus::LogIn, _) => {},
        }
        Outcome::Redraw
    }

    fn has_errors(&self) -> bool {
        self.name_error.is_some() || self.email_error.is_some() || self.password_error.is_some()
    }

    fn submit(&mut self) -> Outcome {
        if self.in_progress {
            return Outcome::Redraw;
        }

        let any_empty = self.name.is_empty() || self.email.is_empty() || self.password.is_empty();
        if any_empty || self.has_errors() {
            return Outcome::Alert(Alert::new("Invalid Input", "Please fix all errors before sign-up."));
        }

        self.in_progress = true;
        Outcome::Signup(SignupRequest {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        })
    }

    /// Clear the in-progress flag. Returns whether a request was outstanding.
    pub(crate) fn finish(&mut self) -> bool {
        std::mem::replace(&mut self.in_progress, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(screen: &mut SignupScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(KeyInput::Char(c));
        }
    }

    fn filled(name: &str, email: &str, password: &str) -> SignupScreen {
        let mut screen = SignupScreen::default();
        type_text(&mut screen, name);
        screen.handle_key(KeyInput::Tab);
        type_text(&mut screen, email);
        screen.handle_key(KeyInput::Tab);
        type_text(&mut screen, password);
        screen.handle_key(KeyInput::Tab);
        screen
    }

    #[test]
    fn validates_each_keystroke() {
        let mut screen = SignupScreen::default();
        screen.handle_key(KeyInput::Tab);
        type_text(&mut screen, "a@b");
        assert_eq!(screen.email_error(), Some(ValidationError::InvalidEmail));

        type_text(&mut screen, ".co");
        assert_eq!(screen.email_error(), None);
    }

    #[test]
    fn password_shows_first_failing_rule() {
        let mut screen = SignupScreen::default();
        screen.handle_key(KeyInput::Tab);
        screen.handle_key(KeyInput::Tab);

        type_text(&mut screen, "abcdefghij");
        assert_eq!(screen.password_error(), Some(ValidationError::PasswordMissingUppercase));

        type_text(&mut screen, "A1!");
        assert_eq!(screen.password_error(), None);
    }

    #[test]
    fn untouched_fields_have_no_message() {
        let screen = SignupScreen::default();
        assert!(!screen.has_errors());
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut screen = SignupScreen::default();
        type_text(&mut screen, "   ");
        assert_eq!(screen.name_error(), Some(ValidationError::NameRequired));
    }

    #[test]
    fn submit_with_errors_alerts() {
        let mut screen = filled("Ada", "ada@example.com", "short");
        assert_eq!(screen.focus(), SignupFocus::Submit);

        let outcome = screen.handle_key(KeyInput::Enter);
        assert!(matches!(outcome, Outcome::Alert(ref alert) if alert.title == "Invalid Input"));
        assert!(!screen.in_progress());
    }

    #[test]
    fn submit_with_empty_field_alerts() {
        let mut screen = filled("", "ada@example.com", "GoodPass123!");
        let outcome = screen.handle_key(KeyInput::Enter);
        assert!(matches!(outcome, Outcome::Alert(_)));
    }

    #[test]
    fn valid_submit_requests_signup() {
        let mut screen = filled("Ada", "ada@example.com", "GoodPass123!");

        let outcome = screen.handle_key(KeyInput::Enter);
        assert_eq!(
            outcome,
            Outcome::Signup(SignupRequest {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "GoodPass123!".into(),
            })
        );
        assert!(screen.in_progress());
        assert_eq!(screen.handle_key(KeyInput::Enter), Outcome::Redraw);
    }

    #[test]
    fn log_in_link_navigates() {
        let mut screen = SignupScreen::default();
        screen.handle_key(KeyInput::Up);
        assert_eq!(screen.focus(), SignupFocus::LogIn);
        assert_eq!(screen.handle_key(KeyInput::Enter), Outcome::Navigate(Route::Login));
    }
}
