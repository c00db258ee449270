//! Deterministic simulation harness for Vouch client testing.
//!
//! In-memory implementations of the [`vouch_client::Backend`] and
//! [`vouch_app::Driver`] traits, so the production [`vouch_app::Runtime`] runs
//! unchanged against a scripted user and a simulated profile service.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the routing
//! and scoring invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod script;
pub mod sim_backend;
pub mod sim_driver;

pub use invariants::{
    AppSnapshot, Invariant, InvariantKind, InvariantRegistry, InvariantResult, LevelMatchesScore,
    ScoreBounded, SessionGatesRoute, Violation,
};
pub use script::{Script, Step};
pub use sim_backend::{Endpoint, SimBackend, SimRequest};
pub use sim_driver::{Frame, SimDriver, SimDriverError};
