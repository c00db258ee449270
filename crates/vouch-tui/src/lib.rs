//! Terminal UI for Vouch
//!
//! A thin shell over [`vouch_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`vouch_app::Runtime`].
//!
//! This crate only handles terminal input, rendering, and log setup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod logging;
pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDriver, TerminalError};
pub use vouch_app::{App, AppAction, AppEvent, Bridge, Driver, KeyInput, Runtime};
