//! Property-based tests for App state machine.
//!
//! Tests verify that routing and scoring invariants hold under arbitrary
//! sequences of key presses and backend completions, including completions
//! that arrive late or for a screen that is no longer shown.

use proptest::prelude::*;
use vouch_app::{App, AppAction, AppEvent, KeyInput, Route, Screen};
use vouch_client::ApiError;
use vouch_core::{Level, ProfileRecord, SessionStore, SessionToken};

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => prop::sample::select(vec!['a', 'Z', '1', '!', '@', '.', ' ', 'é'])
            .prop_map(KeyInput::Char),
        3 => Just(KeyInput::Enter),
        2 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

fn error_strategy() -> impl Strategy<Value = ApiError> {
    prop_oneof![
        Just(ApiError::Unauthorized),
        Just(ApiError::Network("reset".into())),
        Just(ApiError::Status { status: 400, message: Some("Email already registered".into()) }),
        Just(ApiError::Status { status: 500, message: None }),
    ]
}

prop_compose! {
    fn profile_strategy()(
        name in prop::option::of("[a-z]{0,4}"),
        bio in prop::option::of("[a-z]{0,4}"),
        image in prop::option::of("/uploads/[0-9]{1,2}\\.jpg"),
        github in prop::option::of(Just("https://github.com/ada".to_string())),
    ) -> ProfileRecord {
        ProfileRecord {
            id: 1,
            email: "ada@example.com".into(),
            name: name.unwrap_or_default(),
            bio,
            github_url: github,
            profile_image: image,
            ..ProfileRecord::default()
        }
    }
}

/// Tokens shared by logins and completions, so some completions belong to the
/// live session and some to an earlier one.
fn token_strategy() -> impl Strategy<Value = SessionToken> {
    prop::sample::select(vec!["tok-a", "tok-b", "tok-c"]).prop_map(SessionToken::new)
}

/// Generate random app events. Escape is excluded so sequences run to the end.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        12 => key_strategy().prop_map(AppEvent::Key),
        1 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        2 => token_strategy().prop_map(|token| AppEvent::LoginSucceeded { token }),
        1 => error_strategy().prop_map(AppEvent::LoginFailed),
        1 => Just(AppEvent::SignupSucceeded),
        1 => error_strategy().prop_map(AppEvent::SignupFailed),
        2 => (token_strategy(), profile_strategy())
            .prop_map(|(token, profile)| AppEvent::ProfileLoaded { token, profile }),
        1 => (token_strategy(), error_strategy())
            .prop_map(|(token, error)| AppEvent::ProfileLoadFailed { token, error }),
        1 => (token_strategy(), profile_strategy())
            .prop_map(|(token, profile)| AppEvent::ProfileSaved { token, profile }),
        1 => (token_strategy(), error_strategy())
            .prop_map(|(token, error)| AppEvent::ProfileSaveFailed { token, error }),
        1 => token_strategy().prop_map(|token| AppEvent::ImageUploaded { token }),
        1 => (token_strategy(), error_strategy())
            .prop_map(|(token, error)| AppEvent::ImageUploadFailed { token, error }),
    ]
}

/// Session a profile completion was requested under, if it is one.
fn completion_token(event: &AppEvent) -> Option<&SessionToken> {
    match event {
        AppEvent::ProfileLoaded { token, .. }
        | AppEvent::ProfileLoadFailed { token, .. }
        | AppEvent::ProfileSaved { token, .. }
        | AppEvent::ProfileSaveFailed { token, .. }
        | AppEvent::ImageUploaded { token }
        | AppEvent::ImageUploadFailed { token, .. } => Some(token),
        _ => None,
    }
}

fn level_matches_score(app: &App) -> bool {
    match app.screen() {
        Screen::Profile(screen) => screen.level() == Level::from_score(screen.score().value()),
        Screen::Login(_) | Screen::Signup(_) => true,
    }
}

proptest! {
    #[test]
    fn prop_profile_shown_iff_authenticated(
        events in prop::collection::vec(event_strategy(), 0..80)
    ) {
        let mut app = App::new(SessionStore::new());
        let _ = app.start();

        for event in events {
            let _ = app.handle(event);
            prop_assert_eq!(app.route() == Route::Profile, app.session().is_authenticated());
            prop_assert!(level_matches_score(&app));
        }
    }

    #[test]
    fn prop_keys_under_alert_are_inert(
        keys in prop::collection::vec(key_strategy(), 1..20)
    ) {
        let mut app = App::new(SessionStore::new());
        let _ = app.start();
        let _ = app.handle(AppEvent::Key(KeyInput::Tab));
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        prop_assume!(app.alert().is_some());

        let before = app.screen().clone();
        for key in keys.into_iter().filter(|k| !matches!(k, KeyInput::Enter)) {
            let actions = app.handle(AppEvent::Key(key));
            prop_assert!(actions.is_empty());
        }
        prop_assert_eq!(app.screen(), &before);
    }

    #[test]
    fn prop_other_session_completions_change_nothing(
        events in prop::collection::vec(event_strategy(), 0..80)
    ) {
        let mut app = App::new(SessionStore::new());
        let _ = app.start();

        for event in events {
            let foreign = completion_token(&event)
                .is_some_and(|token| app.session().token().as_ref() != Some(token));
            let before = (app.screen().clone(), app.alert().cloned());

            let actions = app.handle(event);
            if foreign {
                prop_assert!(actions.is_empty());
                prop_assert_eq!(&before.0, app.screen());
                prop_assert_eq!(before.1.as_ref(), app.alert());
            }
        }
    }

    #[test]
    fn prop_requests_only_from_user_input(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let mut app = App::new(SessionStore::new());
        let _ = app.start();

        for event in events {
            let from_user = matches!(event, AppEvent::Key(_));
            let actions = app.handle(event);

            for action in &actions {
                let allowed = match action {
                    AppAction::Render | AppAction::Quit => true,
                    // Entering the profile screen or finishing an upload reloads it
                    AppAction::LoadProfile { .. } => true,
                    _ => from_user,
                };
                prop_assert!(allowed, "unexpected {:?}", action);
            }
        }
    }
}

#[test]
fn login_failure_then_retry() {
    let mut app = App::new(SessionStore::new());
    let _ = app.start();

    for c in "ada@example.com".chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
    let _ = app.handle(AppEvent::Key(KeyInput::Tab));
    for c in "pw".chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }

    let first = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(matches!(first.first(), Some(AppAction::Login { .. })));

    let _ = app.handle(AppEvent::LoginFailed(ApiError::Network("refused".into())));
    assert_eq!(
        app.alert().map(|a| a.message.as_str()),
        Some("Network error. Please check your internet connection.")
    );

    let _ = app.handle(AppEvent::Key(KeyInput::Enter));
    let retry = app.handle(AppEvent::Key(KeyInput::Enter));
    assert!(matches!(retry.first(), Some(AppAction::Login { .. })));
}
