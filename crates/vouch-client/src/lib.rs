//! HTTP client for the Vouch profile service.
//!
//! # Components
//!
//! - [`Backend`]: the five REST operations the application needs, abstracted
//!   so the application can run against a simulated server in tests
//! - [`HttpBackend`]: production implementation over `reqwest`
//! - [`ClientConfig`]: validated base URL of the service
//! - [`ApiError`]: classified request failures

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod backend;
mod config;
mod error;
mod http;

pub use backend::{Backend, Credentials, ImageUpload, SignupRequest};
pub use config::{ClientConfig, DEFAULT_BASE_URL, PLACEHOLDER_IMAGE_URL};
pub use error::{ApiError, ClientError};
pub use http::HttpBackend;
