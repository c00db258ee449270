//! Session gate.
//!
//! The session is either [`SessionState::Anonymous`] or
//! [`SessionState::Authenticated`] with the bearer token returned by login.
//! Its presence is the only thing that decides which screens are reachable.
//!
//! [`SessionStore`] is a cheap, cloneable handle to the single live session.
//! Clones observe the same value. Routing layers either poll it with
//! [`SessionStore::get`] or observe transitions through
//! [`SessionStore::subscribe`].
//!
//! The session lives in memory only and ends at logout or process exit.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Opaque bearer credential.
///
/// `Debug` output is redacted so tokens never reach logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Session gate state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No token. Initial state.
    #[default]
    Anonymous,
    /// Logged in with a bearer token.
    Authenticated(SessionToken),
}

impl SessionState {
    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Token, if authenticated.
    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(token) => Some(token),
        }
    }
}

/// Shared handle to the live session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store in the anonymous state.
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self { state: Arc::new(state) }
    }

    /// Current state.
    pub fn get(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Current token. `None` when anonymous.
    pub fn token(&self) -> Option<SessionToken> {
        self.state.borrow().token().cloned()
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Establish a session, replacing any previous token.
    pub fn set(&self, token: SessionToken) {
        let previous = self.state.send_replace(SessionState::Authenticated(token));
        if previous.is_authenticated() {
            tracing::debug!("session token replaced");
        } else {
            tracing::info!("session established");
        }
    }

    /// End the session. Clearing an anonymous store is a no-op.
    pub fn clear(&self) {
        let previous = self.state.send_replace(SessionState::Anonymous);
        if previous.is_authenticated() {
            tracing::info!("session cleared");
        }
    }

    /// Observe session transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
