//! Backend-to-Application translation layer.
//!
//! The [`Bridge`] wraps a [`vouch_client::Backend`] and adapts it to the
//! application lifecycle.
//!
//! # Responsibilities
//!
//! - Converts request [`crate::AppAction`]s into backend calls.
//! - Converts every call result, success or failure, into exactly one
//!   [`crate::AppEvent`]. Nothing is retried and no error escapes.
//! - Reads image files from disk before uploading them.

use std::time::Instant;

use vouch_client::{Backend, ImageUpload};

use crate::{AppAction, AppEvent};

/// Bridge between App and the profile service.
///
/// Generic over [`Backend`] to support both production and simulation. Cheap
/// to clone; the runtime moves a clone into each spawned request.
#[derive(Clone)]
pub struct Bridge<B: Backend> {
    backend: B,
}

impl<B: Backend> Bridge<B> {
    /// Create a new Bridge over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Execute a request action and return its completion event.
    ///
    /// Returns `None` for actions that are not backend requests.
    pub async fn execute(&self, action: AppAction) -> Option<AppEvent> {
        let kind = request_kind(&action)?;
        let started = Instant::now();
        tracing::debug!(request = kind, "request started");

        let event = match action {
            AppAction::Render | AppAction::Quit => return None,
            AppAction::Login { credentials } => match self.backend.login(&credentials).await {
                Ok(token) => AppEvent::LoginSucceeded { token },
                Err(err) => AppEvent::LoginFailed(err),
            },
            AppAction::Signup { request } => match self.backend.signup(&request).await {
                Ok(()) => AppEvent::SignupSucceeded,
                Err(err) => AppEvent::SignupFailed(err),
            },
            AppAction::LoadProfile { token } => match self.backend.fetch_profile(&token).await {
                Ok(profile) => AppEvent::ProfileLoaded { token, profile },
                Err(error) => AppEvent::ProfileLoadFailed { token, error },
            },
            AppAction::UpdateProfile { token, update } => {
                match self.backend.update_profile(&token, &update).await {
                    Ok(profile) => AppEvent::ProfileSaved { token, profile },
                    Err(error) => AppEvent::ProfileSaveFailed { token, error },
                }
            },
            AppAction::UploadImage { token, path } => {
                let result = match ImageUpload::from_path(&path).await {
                    Ok(image) => self.backend.upload_image(&token, image).await,
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => AppEvent::ImageUploaded { token },
                    Err(error) => AppEvent::ImageUploadFailed { token, error },
                }
            },
        };

        tracing::debug!(
            request = kind,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );
        Some(event)
    }
}

fn request_kind(action: &AppAction) -> Option<&'static str> {
    match action {
        AppAction::Render | AppAction::Quit => None,
        AppAction::Login { .. } => Some("login"),
        AppAction::Signup { .. } => Some("signup"),
        AppAction::LoadProfile { .. } => Some("load_profile"),
        AppAction::UpdateProfile { .. } => Some("update_profile"),
        AppAction::UploadImage { .. } => Some("upload_image"),
    }
}
