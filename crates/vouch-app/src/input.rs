//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (activate focused control).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key (focus next control).
    Tab,
    /// Shift+Tab (focus previous control).
    BackTab,
    /// Escape key (dismiss alert, otherwise quit).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (focus previous control).
    Up,
    /// Down arrow key (focus next control).
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}
