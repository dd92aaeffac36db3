//! Key events for the launcher.
//!
//! Wraps crossterm key codes and classifies them into the few keys the
//! launcher cares about.

use crossterm::event::{KeyCode, KeyModifiers};

/// Key event representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Plain character key without modifiers
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// The reaction trigger (space bar)
    pub fn space() -> Self {
        Self::char(' ')
    }

    /// Ctrl+C
    pub fn interrupt() -> Self {
        Self::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
    }

    /// Check if this is a quit key (q or Ctrl+C)
    pub fn is_quit(&self) -> bool {
        self.code == KeyCode::Char('q') || self.is_interrupt()
    }

    /// Check if this is Ctrl+C
    pub fn is_interrupt(&self) -> bool {
        self.code == KeyCode::Char('c') && self.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Check if this is the trigger key
    pub fn is_trigger(&self) -> bool {
        self.code == KeyCode::Char(' ') && !self.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Check if this is the enter key
    pub fn is_enter(&self) -> bool {
        self.code == KeyCode::Enter
    }

    /// Check if this is the up arrow key (or vi `k`)
    pub fn is_up(&self) -> bool {
        self.code == KeyCode::Up || self.code == KeyCode::Char('k')
    }

    /// Check if this is the down arrow key (or vi `j`)
    pub fn is_down(&self) -> bool {
        self.code == KeyCode::Down || self.code == KeyCode::Char('j')
    }

    /// Get the character if this is a char key
    pub fn as_char(&self) -> Option<char> {
        if let KeyCode::Char(c) = self.code { Some(c) } else { None }
    }
}

impl From<crossterm::event::KeyEvent> for KeyEvent {
    fn from(key: crossterm::event::KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

/// What a key means to the reaction game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Trigger,
    Quit,
    Other,
}

impl From<&KeyEvent> for GameKey {
    fn from(key: &KeyEvent) -> Self {
        if key.is_quit() {
            GameKey::Quit
        } else if key.is_trigger() {
            GameKey::Trigger
        } else {
            GameKey::Other
        }
    }
}
