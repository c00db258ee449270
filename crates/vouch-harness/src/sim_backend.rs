//! In-memory profile service.
//!
//! `SimBackend` implements [`Backend`] with the same observable contract as
//! the real service: bearer tokens issued at login, `401` for unknown tokens
//! or bad credentials, `400` with a message for duplicate signups, and image
//! uploads stored under `/uploads/`. Faults can be injected per request or as
//! a network partition.
//!
//! State lives behind a synchronous lock that is never held across an await.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use vouch_client::{ApiError, Backend, Credentials, ImageUpload, SignupRequest};
use vouch_core::{ProfileRecord, ProfileUpdate, SessionToken};

/// A request as seen by the simulated server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimRequest {
    /// `POST /auth/login`.
    Login {
        /// Submitted email.
        email: String,
    },
    /// `POST /auth/signup`.
    Signup {
        /// Submitted email.
        email: String,
    },
    /// `GET /profile/me`.
    FetchProfile,
    /// `PUT /profile/me`.
    UpdateProfile(ProfileUpdate),
    /// `POST /profile/upload-image`.
    UploadImage {
        /// Multipart file name.
        file_name: String,
        /// Multipart content type.
        mime: String,
        /// Payload size in bytes.
        size: usize,
    },
}

impl SimRequest {
    /// Endpoint this request targets.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Login { .. } => Endpoint::Login,
            Self::Signup { .. } => Endpoint::Signup,
            Self::FetchProfile => Endpoint::FetchProfile,
            Self::UpdateProfile(_) => Endpoint::UpdateProfile,
            Self::UploadImage { .. } => Endpoint::UploadImage,
        }
    }
}

/// Service endpoints, for targeting injected faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /auth/login`.
    Login,
    /// `POST /auth/signup`.
    Signup,
    /// `GET /profile/me`.
    FetchProfile,
    /// `PUT /profile/me`.
    UpdateProfile,
    /// `POST /profile/upload-image`.
    UploadImage,
}

#[derive(Debug)]
struct Fault {
    /// `None` matches any endpoint.
    endpoint: Option<Endpoint>,
    error: ApiError,
}

#[derive(Debug)]
struct Account {
    password: String,
    profile: ProfileRecord,
}

#[derive(Debug, Default)]
struct ServerState {
    /// Accounts keyed by email.
    accounts: HashMap<String, Account>,
    /// Issued token to account email.
    tokens: HashMap<String, String>,
    next_id: i64,
    next_token: u64,
    offline: bool,
    faults: VecDeque<Fault>,
    requests: Vec<SimRequest>,
}

impl ServerState {
    /// Record a request and apply injected faults.
    fn admit(&mut self, request: SimRequest) -> Result<(), ApiError> {
        let endpoint = request.endpoint();
        self.requests.push(request);
        if self.offline {
            return Err(ApiError::Network("simulated network partition".into()));
        }

        let due = self.faults.iter().position(|fault| fault.endpoint.is_none_or(|e| e == endpoint));
        match due.and_then(|index| self.faults.remove(index)) {
            Some(fault) => Err(fault.error),
            None => Ok(()),
        }
    }

    fn account_for(&mut self, token: &SessionToken) -> Result<&mut Account, ApiError> {
        let email = self.tokens.get(token.as_str()).ok_or(ApiError::Unauthorized)?;
        self.accounts.get_mut(email).ok_or(ApiError::Unauthorized)
    }

    fn create_account(&mut self, name: &str, email: &str, password: &str) -> Result<i64, ApiError> {
        if self.accounts.contains_key(email) {
            return Err(ApiError::Status {
                status: 400,
                message: Some("Email already registered".into()),
            });
        }

        self.next_id += 1;
        let profile = ProfileRecord {
            id: self.next_id,
            email: email.to_string(),
            name: name.to_string(),
            ..ProfileRecord::default()
        };
        self.accounts.insert(email.to_string(), Account { password: password.to_string(), profile });
        Ok(self.next_id)
    }
}

/// Simulated profile service.
///
/// Clones share the same server state.
#[derive(Debug, Clone, Default)]
pub struct SimBackend {
    state: Arc<Mutex<ServerState>>,
    latency: Duration,
}

impl SimBackend {
    /// Create an empty server with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `latency` (virtual time in paused tests).
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn lock(&self) -> MutexGuard<'_, ServerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an account directly, bypassing the request log. Returns its id.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<i64, ApiError> {
        self.lock().create_account(name, email, password)
    }

    /// Overwrite a stored profile. The id and email are kept.
    pub fn seed_profile(&self, email: &str, profile: ProfileRecord) {
        if let Some(account) = self.lock().accounts.get_mut(email) {
            let id = account.profile.id;
            let email = std::mem::take(&mut account.profile.email);
            account.profile = ProfileRecord { id, email, ..profile };
        }
    }

    /// Stored profile for `email`.
    pub fn profile(&self, email: &str) -> Option<ProfileRecord> {
        self.lock().accounts.get(email).map(|account| account.profile.clone())
    }

    /// Fail every request with a network error until reset.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Fail the next admitted request with `err`. Faults queue in order.
    pub fn fail_next(&self, err: ApiError) {
        self.lock().faults.push_back(Fault { endpoint: None, error: err });
    }

    /// Fail the next request to `endpoint` with `err`.
    pub fn fail_next_on(&self, endpoint: Endpoint, err: ApiError) {
        self.lock().faults.push_back(Fault { endpoint: Some(endpoint), error: err });
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<SimRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&SimRequest) -> bool) -> usize {
        self.lock().requests.iter().filter(|request| predicate(request)).count()
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn login_now(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let mut state = self.lock();
        state.admit(SimRequest::Login { email: credentials.email.clone() })?;

        let account = state.accounts.get(&credentials.email).ok_or(ApiError::Unauthorized)?;
        if account.password != credentials.password {
            return Err(ApiError::Unauthorized);
        }

        state.next_token += 1;
        let token = format!("sim-token-{}", state.next_token);
        state.tokens.insert(token.clone(), credentials.email.clone());
        tracing::debug!(email = %credentials.email, "sim login");
        Ok(SessionToken::new(token))
    }

    fn signup_now(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.admit(SimRequest::Signup { email: request.email.clone() })?;
        state.create_account(&request.name, &request.email, &request.password)?;
        Ok(())
    }

    fn fetch_now(&self, token: &SessionToken) -> Result<ProfileRecord, ApiError> {
        let mut state = self.lock();
        state.admit(SimRequest::FetchProfile)?;
        Ok(state.account_for(token)?.profile.clone())
    }

    fn update_now(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<ProfileRecord, ApiError> {
        let mut state = self.lock();
        state.admit(SimRequest::UpdateProfile(update.clone()))?;

        let non_empty = |value: &str| Some(value.to_string()).filter(|v| !v.is_empty());
        let profile = &mut state.account_for(token)?.profile;
        profile.name.clone_from(&update.name);
        profile.bio = non_empty(&update.bio);
        profile.github_url = non_empty(&update.github_url);
        profile.linkedin_url = non_empty(&update.linkedin_url);
        profile.instagram_url = non_empty(&update.instagram_url);
        Ok(profile.clone())
    }

    fn upload_now(&self, token: &SessionToken, image: &ImageUpload) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.admit(SimRequest::UploadImage {
            file_name: image.file_name.clone(),
            mime: image.mime.clone(),
            size: image.bytes.len(),
        })?;

        if !image.mime.starts_with("image/") {
            return Err(ApiError::Status {
                status: 400,
                message: Some("File must be an image".into()),
            });
        }

        let profile = &mut state.account_for(token)?.profile;
        profile.profile_image = Some(format!("/uploads/{}_{}", profile.id, image.file_name));
        Ok(())
    }
}

impl Backend for SimBackend {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        self.delay().await;
        self.login_now(credentials)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.delay().await;
        self.signup_now(request)
    }

    async fn fetch_profile(&self, token: &SessionToken) -> Result<ProfileRecord, ApiError> {
        self.delay().await;
        self.fetch_now(token)
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        update: &ProfileUpdate,
    ) -> Result<ProfileRecord, ApiError> {
        self.delay().await;
        self.update_now(token, update)
    }

    async fn upload_image(&self, token: &SessionToken, image: ImageUpload) -> Result<(), ApiError> {
        self.delay().await;
        self.upload_now(token, &image)
    }
}
