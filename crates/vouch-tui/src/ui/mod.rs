//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into a frame.

mod alert;
mod form;
mod login;
mod profile;
mod signup;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use vouch_app::{App, Screen};
use vouch_client::ClientConfig;

/// Widest the form column grows on large terminals.
const FORM_MAX_WIDTH: u16 = 72;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, config: &ClientConfig) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    let form_area = centered_column(*main_area, FORM_MAX_WIDTH);
    // The alert owns the cursor while it is shown
    let show_cursor = app.alert().is_none();
    match app.screen() {
        Screen::Login(screen) => login::render(frame, screen, form_area, show_cursor),
        Screen::Signup(screen) => signup::render(frame, screen, form_area, show_cursor),
        Screen::Profile(screen) => profile::render(frame, screen, config, form_area, show_cursor),
    }
    status::render(frame, app, *status_area);

    if let Some(alert) = app.alert() {
        alert::render(frame, alert, *main_area);
    }
}

/// Horizontally centered column at most `max_width` wide.
fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect { x, width, ..area }
}
