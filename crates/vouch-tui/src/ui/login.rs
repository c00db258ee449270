//! Login form

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
};
use vouch_app::screens::{LoginFocus, LoginScreen};

use super::form::Form;

/// Render the login form.
pub fn render(frame: &mut Frame, screen: &LoginScreen, area: Rect, show_cursor: bool) {
    let focus = screen.focus();
    let mut form = Form::new();

    form.blank()
        .field("Email", screen.email(), focus == LoginFocus::Email)
        .field("Password", screen.password(), focus == LoginFocus::Password)
        .blank()
        .buttons(&[("Sign In", focus == LoginFocus::Submit)])
        .blank()
        .buttons(&[("Create account", focus == LoginFocus::CreateAccount)]);

    if screen.in_progress() {
        form.blank().text("  Signing in...", Style::default().fg(Color::Cyan));
    }

    form.render(frame, area, "Sign In", show_cursor);
}
