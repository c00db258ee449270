//! Rendering tests against ratatui's `TestBackend`.
//!
//! Screens are driven through the real `App` and drawn into an in-memory
//! buffer; assertions look for the text a user would see.

use ratatui::{Terminal, backend::TestBackend};
use vouch_app::{App, AppEvent, KeyInput};
use vouch_client::ClientConfig;
use vouch_core::{ProfileRecord, SessionStore, SessionToken};
use vouch_tui::ui;

fn draw(app: &App, width: u16, height: u16) -> String {
    let config = ClientConfig::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app, &config)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn screen_text(app: &App) -> String {
    draw(app, 80, 24)
}

fn press(app: &mut App, keys: impl IntoIterator<Item = KeyInput>) {
    for key in keys {
        let _ = app.handle(AppEvent::Key(key));
    }
}

fn type_text(app: &mut App, text: &str) {
    press(app, text.chars().map(KeyInput::Char));
}

fn profile_app(record: ProfileRecord) -> App {
    let session = SessionStore::new();
    session.set(SessionToken::new("tok"));
    let mut app = App::new(session);
    let _ = app.start();
    let _ = app.handle(AppEvent::ProfileLoaded {
        token: SessionToken::new("tok"),
        profile: record,
    });
    app
}

#[test]
fn login_form_is_drawn() {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();

    let text = screen_text(&app);
    assert!(text.contains("Sign In"));
    assert!(text.contains("Email"));
    assert!(text.contains("[ Create account ]"));
    assert!(text.contains("Signed out"));
}

#[test]
fn password_is_masked() {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();
    type_text(&mut app, "ada@example.com");
    press(&mut app, [KeyInput::Tab]);
    type_text(&mut app, "secret");

    let text = screen_text(&app);
    assert!(text.contains("ada@example.com"));
    assert!(!text.contains("secret"));
    assert!(text.contains("••••••"));
}

#[test]
fn signup_shows_inline_errors() {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();
    press(&mut app, [KeyInput::BackTab, KeyInput::Enter]);
    type_text(&mut app, "Ada");
    press(&mut app, [KeyInput::Tab]);
    type_text(&mut app, "ada@");
    press(&mut app, [KeyInput::Tab]);
    type_text(&mut app, "abc");

    let text = screen_text(&app);
    assert!(text.contains("Create Account"));
    assert!(text.contains("Invalid email address"));
    assert!(text.contains("Minimum 10 characters required"));
}

#[test]
fn profile_header_shows_level_and_score() {
    let app = profile_app(ProfileRecord {
        id: 1,
        email: "ada@example.com".into(),
        name: "Ada".into(),
        bio: Some("Mathematician".into()),
        profile_image: Some("/uploads/1.jpg".into()),
        ..ProfileRecord::default()
    });

    let text = screen_text(&app);
    assert!(text.contains("Profile Level: Gold"));
    assert!(text.contains("70 / 100 XP"));
    assert!(text.contains("http://127.0.0.1:8000/uploads/1.jpg"));
    assert!(text.contains("Add GitHub, LinkedIn, Instagram to level up"));
    assert!(text.contains("Signed in"));
}

#[test]
fn profile_without_image_uses_placeholder() {
    let app = profile_app(ProfileRecord {
        id: 1,
        email: "ada@example.com".into(),
        ..ProfileRecord::default()
    });

    let text = screen_text(&app);
    assert!(text.contains("Profile Level: Bronze"));
    assert!(text.contains("0 / 100 XP"));
    assert!(text.contains(vouch_client::PLACEHOLDER_IMAGE_URL));
}

#[test]
fn loading_profile_hides_fields() {
    let session = SessionStore::new();
    session.set(SessionToken::new("tok"));
    let mut app = App::new(session);
    let _ = app.start();

    let text = screen_text(&app);
    assert!(text.contains("Loading profile..."));
    assert!(!text.contains("Instagram :"));
}

#[test]
fn alert_is_drawn_over_form() {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();
    press(&mut app, [KeyInput::Tab, KeyInput::Tab, KeyInput::Enter]);

    let text = screen_text(&app);
    assert!(text.contains("Missing Fields"));
    assert!(text.contains("Please enter both email and password."));
    assert!(text.contains("Enter: dismiss"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();
    press(&mut app, [KeyInput::Enter, KeyInput::Enter]);

    let _ = draw(&app, 8, 3);
    let _ = draw(&app, 1, 1);
}
