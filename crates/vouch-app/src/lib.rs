//! Application layer for Vouch
//!
//! Pure state machines and generic runtime for the profile client, enabling
//! deterministic simulation testing with the same code that runs in
//! production.
//!
//! # Components
//!
//! - [`App`]: UI state machine (screens, alerts, session gate routing)
//! - [`Bridge`]: Backend bridge (translates App actions into REST calls)
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod bridge;
mod driver;
mod event;
mod field;
mod input;
mod runtime;
pub mod screens;
mod state;

pub use action::AppAction;
pub use app::App;
pub use bridge::Bridge;
pub use driver::Driver;
pub use event::AppEvent;
pub use field::TextInput;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use screens::{LoginScreen, ProfileScreen, Screen, SignupScreen};
pub use state::{Alert, Route};
