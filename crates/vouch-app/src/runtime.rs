//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Bridge`]: Backend bridge
//! - [`Driver`]: Platform-specific I/O
//!
//! Each backend request runs on its own spawned task. Its completion event is
//! sent back over a channel and handled by the loop like any other event, so
//! the App is only ever touched from one place.

use tokio::sync::mpsc;
use vouch_client::Backend;
use vouch_core::SessionStore;

use crate::{App, AppAction, AppEvent, Bridge, Driver};

/// Generic runtime that orchestrates App, Bridge, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `B`: Profile service backend
pub struct Runtime<D, B>
where
    D: Driver,
    B: Backend,
{
    driver: D,
    app: App,
    bridge: Bridge<B>,
    completions_tx: mpsc::UnboundedSender<AppEvent>,
    completions_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<D, B> Runtime<D, B>
where
    D: Driver,
    B: Backend,
{
    /// Create a new runtime. `session` is shared with the App.
    pub fn new(driver: D, backend: B, session: SessionStore) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            driver,
            app: App::new(session),
            bridge: Bridge::new(backend),
            completions_tx,
            completions_rx,
        }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// Each iteration waits for whichever comes first:
    /// 1. A completed backend request
    /// 2. A session transition (logged)
    /// 3. An input event from the driver
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        let mut session_rx = self.app.session().subscribe();

        let actions = self.app.start();
        let mut should_quit = self.process_actions(actions)?;

        while !should_quit {
            let event = tokio::select! {
                biased;

                Some(event) = self.completions_rx.recv() => Some(event),

                Ok(()) = session_rx.changed() => {
                    let authenticated = session_rx.borrow_and_update().is_authenticated();
                    tracing::info!(authenticated, "session changed");
                    None
                }

                polled = self.driver.poll_event() => polled?,
            };

            if let Some(event) = event {
                let actions = self.app.handle(event);
                should_quit = self.process_actions(actions)?;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Carry out actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                request => self.spawn_request(request),
            }
        }
        Ok(false)
    }

    /// Run a request on its own task and route the completion back.
    fn spawn_request(&self, action: AppAction) {
        let bridge = self.bridge.clone();
        let completions = self.completions_tx.clone();

        tokio::spawn(async move {
            if let Some(event) = bridge.execute(action).await {
                // Closed receiver means the runtime already exited
                let _ = completions.send(event);
            }
        });
    }
}
