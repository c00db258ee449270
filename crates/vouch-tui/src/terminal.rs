//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use vouch_app::{App, AppEvent, Driver};
use vouch_client::ClientConfig;

use crate::{KeyInput, ui};

/// Interval between tick events when no input arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal event stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). The client
/// configuration is kept for resolving profile image URLs on screen.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    config: ClientConfig,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new(config: ClientConfig) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, config })
    }

    /// Convert a crossterm key event to an [`AppEvent`].
    ///
    /// Ctrl+C interrupts regardless of focus; other control chords are
    /// ignored so they never type into a field.
    pub fn convert_key(key: KeyEvent) -> Option<AppEvent> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(AppEvent::Interrupt),
                _ => None,
            };
        }

        let input = match key.code {
            KeyCode::Char(c) => KeyInput::Char(c),
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Delete => KeyInput::Delete,
            KeyCode::Tab => KeyInput::Tab,
            KeyCode::BackTab => KeyInput::BackTab,
            KeyCode::Esc => KeyInput::Esc,
            KeyCode::Left => KeyInput::Left,
            KeyCode::Right => KeyInput::Right,
            KeyCode::Up => KeyInput::Up,
            KeyCode::Down => KeyInput::Down,
            KeyCode::Home => KeyInput::Home,
            KeyCode::End => KeyInput::End,
            _ => return None,
        };
        Some(AppEvent::Key(input))
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        Ok(Self::convert_key(key))
                    },
                    Some(Ok(Event::Resize(cols, rows))) => Ok(Some(AppEvent::Resize(cols, rows))),
                    Some(Ok(_)) => Ok(None),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Err(TerminalError::InputClosed),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(TICK_INTERVAL) => Ok(Some(AppEvent::Tick)),
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app, &self.config))?;
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
