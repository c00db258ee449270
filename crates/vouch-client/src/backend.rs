//! Backend abstraction and request bodies.
//!
//! [`Backend`] decouples the application from the transport. Production uses
//! [`crate::HttpBackend`]; tests use an in-memory server with the same
//! contract.

use std::{ffi::OsStr, fmt, future::Future, path::Path};

use serde::Serialize;
use vouch_core::{ProfileRecord, ProfileUpdate, SessionToken};

use crate::ApiError;

/// The profile service operations used by the client.
///
/// Implementations must be cheap to clone; the runtime clones the backend
/// into each spawned request.
pub trait Backend: Clone + Send + Sync + 'static {
    /// `POST /auth/login`. Returns the bearer token.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SessionToken, ApiError>> + Send;

    /// `POST /auth/signup`. Success carries no data.
    fn signup(&self, request: &SignupRequest) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /profile/me`.
    fn fetch_profile(
        &self,
        token: &SessionToken,
    ) -> impl Future<Output = Result<ProfileRecord, ApiError>> + Send;

    /// `PUT /profile/me`. Returns the stored profile.
    fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<ProfileRecord, ApiError>> + Send;

    /// `POST /profile/upload-image` as multipart field `file`.
    fn upload_image(
        &self,
        token: &SessionToken,
        image: ImageUpload,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plain-text password, sent over the configured transport.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /auth/signup`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An image file ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name sent in the multipart part.
    pub file_name: String,
    /// MIME type of the part.
    pub mime: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// File name used when the path has none.
    pub const DEFAULT_FILE_NAME: &'static str = "profile.jpg";
    /// MIME type used when the extension is not a known image type.
    pub const DEFAULT_MIME: &'static str = "image/jpeg";

    /// Build an upload, guessing the MIME type from the file name.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_raw()
            .filter(|mime| mime.starts_with("image/"))
            .unwrap_or(Self::DEFAULT_MIME)
            .to_string();
        Self { file_name, mime, bytes }
    }

    /// Read an image from disk.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Io(format!("{}: {e}", path.display())))?;

        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(Self::DEFAULT_FILE_NAME);

        Ok(Self::new(file_name, bytes))
    }
}
