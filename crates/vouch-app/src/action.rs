//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::path::PathBuf;

use vouch_client::{Credentials, SignupRequest};
use vouch_core::{ProfileUpdate, SessionToken};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Exchange credentials for a session token.
    Login {
        /// Email and password as entered.
        credentials: Credentials,
    },

    /// Create an account.
    Signup {
        /// Name, email and password as entered.
        request: SignupRequest,
    },

    /// Fetch the signed-in user's profile.
    LoadProfile {
        /// Bearer token of the current session.
        token: SessionToken,
    },

    /// Save the editable profile fields.
    UpdateProfile {
        /// Bearer token of the current session.
        token: SessionToken,
        /// Fields to store.
        update: ProfileUpdate,
    },

    /// Upload a new profile image from disk.
    UploadImage {
        /// Bearer token of the current session.
        token: SessionToken,
        /// Local image file.
        path: PathBuf,
    },
}
