//! Status bar
//!
//! Displays the session state, request activity, and key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vouch_app::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = if app.session().is_authenticated() {
        Span::styled("Signed in", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Signed out", Style::default().fg(Color::Red))
    };

    let activity = if app.is_busy() { " | Working..." } else { "" };
    let hints = if app.alert().is_some() {
        " | Enter: dismiss"
    } else {
        " | Tab: next  Enter: select  Esc: quit"
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        session,
        Span::raw(format!(" | {}", app.route())),
        Span::styled(activity, Style::default().fg(Color::Yellow)),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
