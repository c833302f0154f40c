//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples input handling from terminal libraries (crossterm, termion,
/// etc.) so key handling can be driven from tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key (next form field).
    Tab,
    /// Shift-Tab (previous form field).
    BackTab,
    /// Escape key (close popup, step back).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}
