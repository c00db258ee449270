//! Profile editor
//!
//! Header with level and completeness gauge, then the editable fields and
//! action buttons. Score and level come from the server copy, so unsaved
//! edits do not move the gauge.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use vouch_app::screens::{ProfileFocus, ProfileScreen};
use vouch_client::ClientConfig;
use vouch_core::{Level, ProfileAttribute, SocialLink};

use super::form::Form;

const HEADER_HEIGHT: u16 = 6;

fn level_color(level: Level) -> Color {
    match level {
        Level::Bronze => Color::Rgb(205, 127, 50),
        Level::Silver => Color::Gray,
        Level::Gold => Color::Yellow,
        Level::Platinum => Color::Cyan,
    }
}

/// Render the profile editor.
pub fn render(
    frame: &mut Frame,
    screen: &ProfileScreen,
    config: &ClientConfig,
    area: Rect,
    show_cursor: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    let [header_area, form_area] = chunks.as_ref() else {
        return;
    };

    render_header(frame, screen, config, *header_area);
    render_form(frame, screen, *form_area, show_cursor);
}

fn render_header(frame: &mut Frame, screen: &ProfileScreen, config: &ClientConfig, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let [level_row, gauge_row, image_row, hint_row] = rows.as_ref() else {
        return;
    };

    let score = screen.score();
    let level = screen.level();
    let color = level_color(level);

    let level_line = Line::from(vec![
        Span::raw("Profile Level: "),
        Span::styled(level.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(level_line), *level_row);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(score.value()) / 100.0)
        .label(format!("{score} / 100 XP"));
    frame.render_widget(gauge, *gauge_row);

    let image = config.resolve_image(screen.profile().and_then(|p| p.profile_image.as_deref()));
    let image_line = Line::from(vec![
        Span::styled("Image: ", Style::default().fg(Color::Gray)),
        Span::raw(image),
    ]);
    frame.render_widget(Paragraph::new(image_line), *image_row);

    let hint = if screen.profile().is_none() {
        String::new()
    } else {
        missing_hint(&screen.missing())
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        *hint_row,
    );
}

/// `"Add bio, GitHub to level up"`, or a completion note.
fn missing_hint(missing: &[ProfileAttribute]) -> String {
    if missing.is_empty() {
        return "Profile complete".into();
    }
    let labels: Vec<&str> = missing.iter().map(|attribute| attribute.label()).collect();
    format!("Add {} to level up", labels.join(", "))
}

fn render_form(frame: &mut Frame, screen: &ProfileScreen, area: Rect, show_cursor: bool) {
    let focus = screen.focus();
    let mut form = Form::new();

    if screen.is_loading() && screen.profile().is_none() {
        form.blank().text("  Loading profile...", Style::default().fg(Color::Cyan));
        form.blank().buttons(&[("Log Out", focus == ProfileFocus::Logout)]);
        form.render(frame, area, "Edit", false);
        return;
    }

    form.field("Name", screen.name(), focus == ProfileFocus::Name)
        .field("Bio", screen.bio(), focus == ProfileFocus::Bio)
        .field("GitHub", screen.social(SocialLink::GitHub), focus == ProfileFocus::GitHub)
        .field("LinkedIn", screen.social(SocialLink::LinkedIn), focus == ProfileFocus::LinkedIn)
        .field("Instagram", screen.social(SocialLink::Instagram), focus == ProfileFocus::Instagram)
        .field("Image file", screen.image_path(), focus == ProfileFocus::ImagePath)
        .blank()
        .buttons(&[
            ("Upload Image", focus == ProfileFocus::Upload),
            ("Save Changes", focus == ProfileFocus::Save),
            ("Log Out", focus == ProfileFocus::Logout),
        ]);

    let activity = if screen.is_saving() {
        Some("  Saving...")
    } else if screen.is_uploading() {
        Some("  Uploading...")
    } else if screen.is_loading() {
        Some("  Refreshing...")
    } else {
        None
    };
    if let Some(activity) = activity {
        form.blank().text(activity, Style::default().fg(Color::Cyan));
    }

    form.render(frame, area, "Edit", show_cursor);
}
