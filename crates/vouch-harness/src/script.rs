//! Scripted user input.
//!
//! A [`Script`] is the sequence of things a simulated user does: key presses,
//! other driver events, and pauses that wait for outstanding requests to
//! finish before typing on.

use std::collections::VecDeque;

use vouch_app::{AppEvent, KeyInput};

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Deliver an event from the driver.
    Event(AppEvent),
    /// Wait until no request started by the current screen is pending.
    Settle,
}

/// Builder for a sequence of [`Step`]s.
///
/// Helpers assume the focus position a fresh screen starts with: email on the
/// login screen, name on the signup screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: VecDeque<Step>,
}

impl Script {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Press a key.
    #[must_use]
    pub fn key(mut self, key: KeyInput) -> Self {
        self.steps.push_back(Step::Event(AppEvent::Key(key)));
        self
    }

    /// Press each key in order.
    #[must_use]
    pub fn keys(self, keys: impl IntoIterator<Item = KeyInput>) -> Self {
        keys.into_iter().fold(self, Self::key)
    }

    /// Type `text` into the focused field.
    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.keys(text.chars().map(KeyInput::Char))
    }

    /// Press Tab `count` times.
    #[must_use]
    pub fn tab(self, count: usize) -> Self {
        self.keys(std::iter::repeat_n(KeyInput::Tab, count))
    }

    /// Press Enter.
    #[must_use]
    pub fn enter(self) -> Self {
        self.key(KeyInput::Enter)
    }

    /// Deliver an arbitrary driver event.
    #[must_use]
    pub fn event(mut self, event: AppEvent) -> Self {
        self.steps.push_back(Step::Event(event));
        self
    }

    /// Wait for outstanding requests.
    #[must_use]
    pub fn settle(mut self) -> Self {
        self.steps.push_back(Step::Settle);
        self
    }

    /// Fill in and submit the login form, then wait for the result.
    #[must_use]
    pub fn login(self, email: &str, password: &str) -> Self {
        self.text(email).tab(1).text(password).enter().settle()
    }

    /// From the login screen, open signup, submit the form, and wait.
    #[must_use]
    pub fn signup(self, name: &str, email: &str, password: &str) -> Self {
        // Shift+Tab from the email field wraps to "Create account"
        self.key(KeyInput::BackTab)
            .enter()
            .text(name)
            .tab(1)
            .text(email)
            .tab(1)
            .text(password)
            .tab(1)
            .enter()
            .settle()
    }

    /// Number of remaining steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps remain.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub(crate) fn peek(&self) -> Option<&Step> {
        self.steps.front()
    }

    pub(crate) fn pop(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }

    pub(crate) fn append(&mut self, other: Script) {
        self.steps.extend(other.steps);
    }
}
