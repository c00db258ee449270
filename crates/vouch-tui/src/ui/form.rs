//! Form layout shared by the screens.
//!
//! Fields are single lines of the form `     Email : ada@example.com`. The
//! focused control is highlighted and, for text fields, gets the cursor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use vouch_app::TextInput;

/// Width of the right-aligned label column.
const LABEL_WIDTH: usize = 10;

/// Columns before the value: label plus `" : "`.
const VALUE_OFFSET: u16 = LABEL_WIDTH as u16 + 3;

/// Inside the block border.
const BORDER: u16 = 1;

pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Lines of a form plus where the cursor belongs.
#[derive(Default)]
pub(crate) struct Form {
    lines: Vec<Line<'static>>,
    cursor: Option<(u16, u16)>,
}

impl Form {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A labeled text field.
    pub(crate) fn field(&mut self, label: &str, input: &TextInput, focused: bool) -> &mut Self {
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if focused {
            let row = self.lines.len() as u16;
            self.cursor = Some((row, VALUE_OFFSET + input.cursor() as u16));
        }

        self.lines.push(Line::from(vec![
            Span::styled(format!("{label:>LABEL_WIDTH$}"), label_style),
            Span::raw(" : "),
            Span::raw(input.display()),
        ]));
        self
    }

    /// Inline validation message under a field. Blank when `None`.
    pub(crate) fn error(&mut self, message: Option<String>) -> &mut Self {
        let indent = " ".repeat(usize::from(VALUE_OFFSET));
        let line = match message {
            Some(message) => Line::from(vec![
                Span::raw(indent),
                Span::styled(message, Style::default().fg(Color::Red)),
            ]),
            None => Line::default(),
        };
        self.lines.push(line);
        self
    }

    /// A row of buttons, `(label, focused)`.
    pub(crate) fn buttons(&mut self, buttons: &[(&str, bool)]) -> &mut Self {
        let mut spans = vec![Span::raw(" ".repeat(usize::from(VALUE_OFFSET)))];
        for (i, (label, focused)) in buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[ {label} ]"), focus_style(*focused)));
        }
        self.lines.push(Line::from(spans));
        self
    }

    /// Free text line.
    pub(crate) fn text(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.lines.push(Line::from(Span::styled(text.into(), style)));
        self
    }

    /// Empty line.
    pub(crate) fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::default());
        self
    }

    /// Draw inside a titled block, placing the cursor if a field is focused.
    pub(crate) fn render(&mut self, frame: &mut Frame, area: Rect, title: &str, show_cursor: bool) {
        let block = Block::default().borders(Borders::ALL).title(format!(" {title} "));
        let lines = std::mem::take(&mut self.lines);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if !show_cursor {
            return;
        }
        if let Some((row, col)) = self.cursor {
            let max_x = area.x.saturating_add(area.width).saturating_sub(BORDER + 1);
            let max_y = area.y.saturating_add(area.height).saturating_sub(BORDER + 1);
            let x = area.x.saturating_add(BORDER).saturating_add(col).min(max_x);
            let y = area.y.saturating_add(BORDER).saturating_add(row).min(max_y);
            frame.set_cursor_position((x, y));
        }
    }
}
