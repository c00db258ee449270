//! Signup form
//!
//! Validation messages are shown under each field as the user types.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
};
use vouch_app::screens::{SignupFocus, SignupScreen};

use super::form::Form;

/// Render the signup form.
pub fn render(frame: &mut Frame, screen: &SignupScreen, area: Rect, show_cursor: bool) {
    let focus = screen.focus();
    let message = |error: Option<vouch_core::ValidationError>| error.map(|e| e.to_string());
    let mut form = Form::new();

    form.blank()
        .field("Name", screen.name(), focus == SignupFocus::Name)
        .error(message(screen.name_error()))
        .field("Email", screen.email(), focus == SignupFocus::Email)
        .error(message(screen.email_error()))
        .field("Password", screen.password(), focus == SignupFocus::Password)
        .error(message(screen.password_error()))
        .buttons(&[("Create Account", focus == SignupFocus::Submit)])
        .blank()
        .buttons(&[("Log In", focus == SignupFocus::LogIn)]);

    if screen.in_progress() {
        form.blank().text("  Creating account...", Style::default().fg(Color::Cyan));
    }

    form.render(frame, area, "Create Account", show_cursor);
}
