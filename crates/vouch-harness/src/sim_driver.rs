//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`vouch_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Input comes from a [`Script`]. Every render is recorded as a [`Frame`] and,
//! when a registry is attached, checked against the invariants. A
//! [`Step::Settle`] holds input back while the last rendered state was busy,
//! polling on the tokio clock so paused-time tests advance instantly. Once
//! the script runs out and the app is idle the driver delivers
//! [`AppEvent::Interrupt`], which ends the run.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use thiserror::Error;
use vouch_app::{Alert, App, AppEvent, Driver, Route, Screen};

use crate::{
    invariants::{AppSnapshot, InvariantRegistry},
    script::{Script, Step},
};

/// Idle polls allowed while busy before the run is declared stuck.
const DEFAULT_MAX_IDLE_POLLS: u32 = 1_000;

/// Virtual time between idle polls.
const POLL_STEP: Duration = Duration::from_millis(5);

/// Error type for simulation driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimDriverError {
    /// A rendered state broke an invariant.
    #[error("invariant violated after render {render}: {message}")]
    Invariant {
        /// Zero-based render index.
        render: usize,
        /// Violation report.
        message: String,
    },

    /// The app stayed busy for longer than the poll budget.
    #[error("app still busy after {polls} idle polls")]
    Stalled {
        /// Polls spent waiting.
        polls: u32,
    },
}

/// One recorded render.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Observable summary.
    pub snapshot: AppSnapshot,
    /// Screen state as drawn.
    pub screen: Screen,
    /// Alert drawn on top, if any.
    pub alert: Option<Alert>,
}

#[derive(Debug, Default)]
struct SharedState {
    script: Script,
    frames: Vec<Frame>,
    idle_polls: u32,
}

/// Simulation driver for deterministic testing.
///
/// Clones share the script and the recorded frames, so a test can keep a
/// handle after moving the driver into a [`vouch_app::Runtime`].
#[derive(Clone)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
    max_idle_polls: u32,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a driver with an empty script.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SharedState::default())),
            invariants: None,
            max_idle_polls: DEFAULT_MAX_IDLE_POLLS,
        }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Append `script` to the pending input.
    #[must_use]
    pub fn with_script(self, script: Script) -> Self {
        self.lock().script.append(script);
        self
    }

    /// Change the idle poll budget.
    #[must_use]
    pub fn with_max_idle_polls(mut self, polls: u32) -> Self {
        self.max_idle_polls = polls;
        self
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue an event after the current script.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().script.append(Script::new().event(event));
    }

    /// Queue a wait for outstanding requests.
    pub fn inject_settle(&self) {
        self.lock().script.append(Script::new().settle());
    }

    /// Check if scripted input remains.
    pub fn has_pending(&self) -> bool {
        !self.lock().script.is_empty()
    }

    /// Every render so far.
    pub fn frames(&self) -> Vec<Frame> {
        self.lock().frames.clone()
    }

    /// Most recent render.
    pub fn last_frame(&self) -> Option<Frame> {
        self.lock().frames.last().cloned()
    }

    /// Routes in the order they were first drawn after a change.
    pub fn rendered_routes(&self) -> Vec<Route> {
        let mut routes: Vec<Route> =
            self.lock().frames.iter().map(|frame| frame.snapshot.route).collect();
        routes.dedup();
        routes
    }

    /// Distinct alerts in the order they appeared.
    pub fn alerts_seen(&self) -> Vec<Alert> {
        let mut alerts: Vec<Alert> =
            self.lock().frames.iter().filter_map(|frame| frame.alert.clone()).collect();
        alerts.dedup();
        alerts
    }

    /// Next input, or `Err` once the poll budget is spent.
    fn next_step(&self) -> Result<Poll, SimDriverError> {
        let mut state = self.lock();
        let busy = state.frames.last().is_some_and(|frame| frame.snapshot.busy);

        if busy && matches!(state.script.peek(), Some(Step::Settle) | None) {
            state.idle_polls += 1;
            if state.idle_polls > self.max_idle_polls {
                return Err(SimDriverError::Stalled { polls: state.idle_polls });
            }
            return Ok(Poll::Wait);
        }

        state.idle_polls = 0;
        Ok(match state.script.pop() {
            Some(Step::Event(event)) => Poll::Ready(event),
            Some(Step::Settle) => Poll::Idle,
            None => Poll::Ready(AppEvent::Interrupt),
        })
    }
}

enum Poll {
    Ready(AppEvent),
    Wait,
    Idle,
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        match self.next_step()? {
            Poll::Ready(event) => Ok(Some(event)),
            Poll::Idle => Ok(None),
            Poll::Wait => {
                tokio::time::sleep(POLL_STEP).await;
                Ok(None)
            },
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let snapshot = AppSnapshot::from_app(app);

        let render = {
            let mut state = self.lock();
            state.frames.push(Frame {
                snapshot: snapshot.clone(),
                screen: app.screen().clone(),
                alert: app.alert().cloned(),
            });
            state.frames.len() - 1
        };

        if let Some(registry) = &self.invariants {
            registry.check_all(&snapshot).map_err(|violations| {
                let message =
                    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
                tracing::error!(render, %message, "invariant violated");
                SimDriverError::Invariant { render, message }
            })?;
        }

        Ok(())
    }

    fn stop(&mut self) {}
}
