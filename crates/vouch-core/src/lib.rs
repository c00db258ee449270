//! Core rules for the Vouch profile client.
//!
//! Everything in this crate is pure: no network, no terminal, no clock. The
//! application layer composes these pieces into screens.
//!
//! # Components
//!
//! - [`validation`]: per-field validators (email, password strength, name,
//!   social profile URLs)
//! - [`profile`]: the profile record owned by the server and its editable
//!   subset
//! - [`score`]: completeness score and level classification
//! - [`session`]: the session gate and its injectable store

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod profile;
pub mod score;
pub mod session;
pub mod validation;

pub use profile::{ProfileRecord, ProfileUpdate};
pub use score::{Level, ProfileAttribute, Score, completeness_score, missing_attributes};
pub use session::{SessionState, SessionStore, SessionToken};
pub use validation::{SocialLink, Validation, ValidationError};
