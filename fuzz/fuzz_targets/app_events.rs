//! Fuzz target for the App state machine
//!
//! Arbitrary keys interleaved with backend completions, delivered in any
//! order, including completions for screens that are no longer shown.
//!
//! # Invariants
//!
//! - NEVER panic
//! - Profile screen shown if and only if the session is authenticated
//! - Displayed level matches displayed score

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_app::{App, AppEvent, KeyInput, Route, Screen};
use vouch_client::ApiError;
use vouch_core::{Level, ProfileRecord, SessionStore, SessionToken};

#[derive(Debug, Arbitrary)]
enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        match key {
            Key::Char(c) => Self::Char(c),
            Key::Enter => Self::Enter,
            Key::Backspace => Self::Backspace,
            Key::Delete => Self::Delete,
            Key::Tab => Self::Tab,
            Key::BackTab => Self::BackTab,
            Key::Left => Self::Left,
            Key::Right => Self::Right,
            Key::Up => Self::Up,
            Key::Down => Self::Down,
            Key::Home => Self::Home,
            Key::End => Self::End,
        }
    }
}

#[derive(Debug, Arbitrary)]
enum Input {
    Key(Key),
    LoginSucceeded(String),
    LoginFailed,
    SignupSucceeded,
    SignupFailed,
    ProfileLoaded { name: String, bio: Option<String>, image: Option<String> },
    ProfileLoadFailed,
    ProfileSaved { name: String },
    ProfileSaveFailed,
    ImageUploaded,
    ImageUploadFailed,
}

fn record(name: String, bio: Option<String>, image: Option<String>) -> ProfileRecord {
    ProfileRecord { id: 1, name, bio, profile_image: image, ..ProfileRecord::default() }
}

fn failure() -> ApiError {
    ApiError::Status { status: 500, message: None }
}

fuzz_target!(|inputs: Vec<Input>| {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();

    for input in inputs {
        // Completions belong to the live session; logins rotate it
        let token = app.session().token().unwrap_or_else(|| SessionToken::new("signed-out"));
        let event = match input {
            Input::Key(key) => AppEvent::Key(key.into()),
            Input::LoginSucceeded(token) => AppEvent::LoginSucceeded { token: SessionToken::new(token) },
            Input::LoginFailed => AppEvent::LoginFailed(ApiError::Unauthorized),
            Input::SignupSucceeded => AppEvent::SignupSucceeded,
            Input::SignupFailed => AppEvent::SignupFailed(failure()),
            Input::ProfileLoaded { name, bio, image } => {
                AppEvent::ProfileLoaded { token, profile: record(name, bio, image) }
            }
            Input::ProfileLoadFailed => AppEvent::ProfileLoadFailed { token, error: failure() },
            Input::ProfileSaved { name } => {
                AppEvent::ProfileSaved { token, profile: record(name, None, None) }
            }
            Input::ProfileSaveFailed => AppEvent::ProfileSaveFailed { token, error: failure() },
            Input::ImageUploaded => AppEvent::ImageUploaded { token },
            Input::ImageUploadFailed => AppEvent::ImageUploadFailed { token, error: failure() },
        };
        let _ = app.handle(event);

        assert_eq!(app.route() == Route::Profile, app.session().is_authenticated());
        if let Screen::Profile(screen) = app.screen() {
            assert_eq!(screen.level(), Level::from_score(screen.score().value()));
        }
    }
});
