//! `reqwest` implementation of [`Backend`].

use reqwest::{Client, Response, multipart};
use serde::Deserialize;
use vouch_core::{ProfileRecord, ProfileUpdate, SessionToken};

use crate::{ApiError, Backend, ClientConfig, ClientError, Credentials, ImageUpload, SignupRequest};

const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";
const PROFILE_PATH: &str = "/profile/me";
const UPLOAD_PATH: &str = "/profile/upload-image";

/// Profile service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

impl HttpBackend {
    /// Build a client for `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("vouch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Service location.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Pass success through; turn anything else into a classified [`ApiError`].
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    tracing::debug!(%status, body_len = body.len(), "request rejected");
    Err(ApiError::from_response(status, &body))
}

impl Backend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        tracing::debug!(email = %credentials.email, "login");

        let response =
            self.client.post(self.config.endpoint(LOGIN_PATH)).json(credentials).send().await?;
        let body: LoginResponse = check(response).await?.json().await?;

        if body.access_token.is_empty() {
            return Err(ApiError::Decode("empty access_token".into()));
        }
        Ok(SessionToken::new(body.access_token))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        tracing::debug!(email = %request.email, "signup");

        let response =
            self.client.post(self.config.endpoint(SIGNUP_PATH)).json(request).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn fetch_profile(&self, token: &SessionToken) -> Result<ProfileRecord, ApiError> {
        let response = self
            .client
            .get(self.config.endpoint(PROFILE_PATH))
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let profile: ProfileRecord = check(response).await?.json().await?;
        tracing::debug!(id = profile.id, "profile fetched");
        Ok(profile)
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<ProfileRecord, ApiError> {
        let response = self
            .client
            .put(self.config.endpoint(PROFILE_PATH))
            .bearer_auth(token.as_str())
            .json(update)
            .send()
            .await?;

        let profile: ProfileRecord = check(response).await?.json().await?;
        tracing::debug!(id = profile.id, "profile updated");
        Ok(profile)
    }

    async fn upload_image(&self, token: &SessionToken, image: ImageUpload) -> Result<(), ApiError> {
        tracing::debug!(file = %image.file_name, size = image.bytes.len(), "uploading image");

        let part = multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)
            .map_err(|e| ApiError::Io(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.endpoint(UPLOAD_PATH))
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}
