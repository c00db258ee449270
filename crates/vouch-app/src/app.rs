//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the application completely decoupled from I/O and the network.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Routes between screens and enforces the session gate after every event:
//!   the profile screen is shown if and only if the session is authenticated.
//! - Owns the modal alert, which captures keys until dismissed.
//! - Applies backend completions to the screen that requested them and drops
//!   completions whose screen has since been replaced, whose request is no
//!   longer outstanding, or whose session has ended.

use vouch_core::{SessionStore, SessionToken};

use crate::{
    Alert, AppAction, AppEvent, KeyInput, ProfileScreen, Route, Screen,
    screens::{LoginScreen, Outcome, SignupScreen, login_failure_message},
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Shared session handle. The only authority on authentication.
    session: SessionStore,
    /// Screen being shown.
    screen: Screen,
    /// Modal shown above the screen. `None` if no alert.
    alert: Option<Alert>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App on the login screen.
    pub fn new(session: SessionStore) -> Self {
        Self { session, screen: Screen::default(), alert: None, terminal_size: (80, 24) }
    }

    /// Route to the screen the session allows and draw it.
    ///
    /// Called once before the first event. A store that is already
    /// authenticated goes straight to the profile screen.
    pub fn start(&mut self) -> Vec<AppAction> {
        let mut actions = self.enforce_gate();
        actions.push(AppAction::Render);
        actions
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        let mut actions = self.dispatch(event);
        actions.extend(self.enforce_gate());
        actions
    }

    fn dispatch(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Interrupt => vec![AppAction::Quit],

            AppEvent::LoginSucceeded { token } => self.login_succeeded(token),
            AppEvent::LoginFailed(err) => {
                let Screen::Login(screen) = &mut self.screen else {
                    return self.stale("login failure");
                };
                if !screen.finish() {
                    return self.stale("login failure");
                }
                tracing::warn!(error = %err, "login failed");
                self.show(Alert::new("Login Failed", login_failure_message(&err)))
            },

            AppEvent::SignupSucceeded => {
                let Screen::Signup(screen) = &mut self.screen else {
                    return self.stale("signup success");
                };
                if !screen.finish() {
                    return self.stale("signup success");
                }
                self.show(Alert::new("Success", "Account created successfully!").then(Route::Login))
            },
            AppEvent::SignupFailed(err) => {
                let Screen::Signup(screen) = &mut self.screen else {
                    return self.stale("signup failure");
                };
                if !screen.finish() {
                    return self.stale("signup failure");
                }
                tracing::warn!(error = %err, "signup failed");
                self.show(Alert::new("Signup Failed", "Email already exists or network error"))
            },

            AppEvent::ProfileLoaded { token, profile } => {
                let Some(screen) = self.profile_for(&token) else {
                    return self.stale("profile load");
                };
                if !screen.loaded(profile) {
                    return self.stale("profile load");
                }
                vec![AppAction::Render]
            },
            AppEvent::ProfileLoadFailed { token, error } => {
                let Some(screen) = self.profile_for(&token) else {
                    return self.stale("profile load failure");
                };
                if !screen.load_failed() {
                    return self.stale("profile load failure");
                }
                tracing::warn!(error = %error, "profile load failed");
                self.show(Alert::new("Error", "Could not load profile."))
            },
            AppEvent::ProfileSaved { token, profile } => {
                let Some(screen) = self.profile_for(&token) else {
                    return self.stale("profile save");
                };
                if !screen.saved(profile) {
                    return self.stale("profile save");
                }
                self.show(Alert::new("Updated", "Profile saved successfully."))
            },
            AppEvent::ProfileSaveFailed { token, error } => {
                let Some(screen) = self.profile_for(&token) else {
                    return self.stale("profile save failure");
                };
                if !screen.save_failed() {
                    return self.stale("profile save failure");
                }
                tracing::warn!(error = %error, "profile save failed");
                self.show(Alert::new("Failed", "Could not update profile."))
            },
            AppEvent::ImageUploaded { token } => {
                let Some(screen) = self.profile_for(&token) else {
                    return self.stale("image upload");
                };
                if !screen.uploaded() {
                    return self.stale("image upload");
                }
                let mut actions = self.show(Alert::new("Success", "Image updated!"));
                actions.insert(0, AppAction::LoadProfile { token });
                actions
            },
            AppEvent::ImageUploadFailed { token, error } => {
                let Some(screen) = self.profile_for(&token) else {
                    return self.stale("image upload failure");
                };
                if !screen.upload_failed() {
                    return self.stale("image upload failure");
                }
                tracing::warn!(error = %error, "image upload failed");
                self.show(Alert::new("Upload Failed", "Please try again."))
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if let Some(alert) = &self.alert {
            return match key {
                KeyInput::Enter | KeyInput::Esc => {
                    let next = alert.on_dismiss;
                    self.alert = None;
                    match next {
                        Some(route) => self.navigate(route),
                        None => vec![AppAction::Render],
                    }
                },
                _ => vec![],
            };
        }

        if key == KeyInput::Esc {
            return vec![AppAction::Quit];
        }

        let outcome = self.screen.handle_key(key);
        self.apply(outcome)
    }

    fn apply(&mut self, outcome: Outcome) -> Vec<AppAction> {
        match outcome {
            Outcome::Redraw => vec![AppAction::Render],
            Outcome::Alert(alert) => self.show(alert),
            Outcome::Navigate(route) => self.navigate(route),
            Outcome::Login(credentials) => vec![AppAction::Login { credentials }, AppAction::Render],
            Outcome::Signup(request) => vec![AppAction::Signup { request }, AppAction::Render],
            Outcome::Save(update) => match self.session.token() {
                Some(token) => vec![AppAction::UpdateProfile { token, update }, AppAction::Render],
                None => vec![AppAction::Render],
            },
            Outcome::Upload(path) => match self.session.token() {
                Some(token) => vec![AppAction::UploadImage { token, path }, AppAction::Render],
                None => vec![AppAction::Render],
            },
            Outcome::Logout => {
                self.session.clear();
                vec![AppAction::Render]
            },
        }
    }

    fn login_succeeded(&mut self, token: SessionToken) -> Vec<AppAction> {
        // The session is established even if the login screen was left.
        self.session.set(token);
        if let Screen::Login(screen) = &mut self.screen {
            screen.finish();
        }
        vec![AppAction::Render]
    }

    /// The profile screen, if shown and `token` is still the live session.
    fn profile_for(&mut self, token: &SessionToken) -> Option<&mut ProfileScreen> {
        if self.session.token().as_ref() != Some(token) {
            return None;
        }
        match &mut self.screen {
            Screen::Profile(screen) => Some(screen),
            Screen::Login(_) | Screen::Signup(_) => None,
        }
    }

    fn show(&mut self, alert: Alert) -> Vec<AppAction> {
        self.alert = Some(alert);
        vec![AppAction::Render]
    }

    fn stale(&self, what: &str) -> Vec<AppAction> {
        tracing::debug!(completion = what, route = %self.screen.route(), "dropping stale completion");
        vec![]
    }

    fn navigate(&mut self, route: Route) -> Vec<AppAction> {
        match route {
            Route::Login => self.screen = Screen::Login(LoginScreen::default()),
            Route::Signup => self.screen = Screen::Signup(SignupScreen::default()),
            Route::Profile => return self.open_profile(),
        }
        tracing::debug!(%route, "navigated");
        vec![AppAction::Render]
    }

    fn open_profile(&mut self) -> Vec<AppAction> {
        let Some(token) = self.session.token() else {
            return vec![];
        };
        self.screen = Screen::Profile(ProfileScreen::loading());
        tracing::debug!(route = %Route::Profile, "navigated");
        vec![AppAction::LoadProfile { token }, AppAction::Render]
    }

    /// Move to the screen the session allows, if not already there.
    fn enforce_gate(&mut self) -> Vec<AppAction> {
        let authenticated = self.session.is_authenticated();
        match (&self.screen, authenticated) {
            (Screen::Login(_) | Screen::Signup(_), true) => self.open_profile(),
            (Screen::Profile(_), false) => self.navigate(Route::Login),
            _ => vec![],
        }
    }

    /// Session handle shared with the runtime.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Screen being shown.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Route of the screen being shown.
    pub fn route(&self) -> Route {
        self.screen.route()
    }

    /// Modal shown above the screen. `None` if no alert.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Whether any backend request started by the current screen is pending.
    pub fn is_busy(&self) -> bool {
        match &self.screen {
            Screen::Login(screen) => screen.in_progress(),
            Screen::Signup(screen) => screen.in_progress(),
            Screen::Profile(screen) => {
                screen.is_loading() || screen.is_saving() || screen.is_uploading()
            },
        }
    }
}
