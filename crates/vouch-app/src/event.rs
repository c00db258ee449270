//! Application input events.
//!
//! This module defines [`AppEvent`], the complete set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize, interrupt) and system ticks.
//! - Completions of backend requests, produced by the [`crate::Bridge`].
//!   Every request action yields exactly one completion event. Profile
//!   completions carry the token they were requested with, so a result from
//!   an earlier session is never applied to a later one.

use vouch_client::ApiError;
use vouch_core::{ProfileRecord, SessionToken};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Ctrl+C. Quits regardless of screen or alert.
    Interrupt,

    /// Login accepted.
    LoginSucceeded {
        /// Bearer token for the new session.
        token: SessionToken,
    },

    /// Login rejected or not delivered.
    LoginFailed(ApiError),

    /// Account created.
    SignupSucceeded,

    /// Account creation failed.
    SignupFailed(ApiError),

    /// Profile fetched.
    ProfileLoaded {
        /// Session the request was made under.
        token: SessionToken,
        /// Server copy of the profile.
        profile: ProfileRecord,
    },

    /// Profile fetch failed.
    ProfileLoadFailed {
        /// Session the request was made under.
        token: SessionToken,
        /// Why the fetch failed.
        error: ApiError,
    },

    /// Profile update stored.
    ProfileSaved {
        /// Session the request was made under.
        token: SessionToken,
        /// Server copy after the update.
        profile: ProfileRecord,
    },

    /// Profile update failed.
    ProfileSaveFailed {
        /// Session the request was made under.
        token: SessionToken,
        /// Why the update failed.
        error: ApiError,
    },

    /// Image upload accepted.
    ImageUploaded {
        /// Session the request was made under.
        token: SessionToken,
    },

    /// Image upload failed, including failure to read the local file.
    ImageUploadFailed {
        /// Session the request was made under.
        token: SessionToken,
        /// Why the upload failed.
        error: ApiError,
    },
}
