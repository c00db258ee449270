//! Modal alert

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use vouch_app::Alert;

const WIDTH: u16 = 52;
const HEIGHT: u16 = 7;

/// Render `alert` centered over `area`.
pub fn render(frame: &mut Frame, alert: &Alert, area: Rect) {
    let popup = centered(area, WIDTH, HEIGHT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(alert.message.clone()),
        Line::default(),
        Line::from(Span::styled("Enter to dismiss", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph =
        Paragraph::new(text).block(block).alignment(Alignment::Center).wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
