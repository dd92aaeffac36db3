//! Terminal plumbing for the launcher.
//!
//! - `RawModeGuard`: scoped raw-mode acquisition, restored on drop
//! - `Console`: padded line output, in-place redraws and the bell cue
//! - `KeySource`: async key presses from the terminal or a script

mod events;
mod input;

pub use events::{CrosstermKeys, KeySource, ScriptedKeys};
pub use input::{GameKey, KeyEvent};

use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor::MoveTo, execute};
use log::{debug, warn};
use std::fmt::Display;
use std::io::{IsTerminal, Write, stdin};

use crate::error::{LauncherError, Result};

/// Line terminator that also returns the carriage while raw mode is on.
pub const NEWLINE: &str = "\r\n";

const BELL: &str = "\x07";

/// Raw mode for the lifetime of the guard.
///
/// When stdin is not a terminal the guard is inert, so piped input still
/// works. Every exit path that drops the guard restores the terminal.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enable raw mode if stdin is a terminal.
    pub fn acquire() -> Result<Self> {
        if !stdin().is_terminal() {
            debug!("stdin is not a terminal, skipping raw mode");
            return Ok(Self { active: false });
        }
        enable_raw_mode().map_err(|e| LauncherError::Terminal(format!("enable raw mode: {}", e)))?;
        Ok(Self { active: true })
    }

    /// A guard that never touches the terminal.
    pub fn inert() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active
            && let Err(e) = disable_raw_mode()
        {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Padded output helpers shared by every screen of the launcher.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    padding: usize,
    bell: bool,
}

impl Console {
    pub fn new(padding: usize, bell: bool) -> Self {
        Self { padding, bell }
    }

    /// Left padding as spaces.
    pub fn pad(&self) -> String {
        " ".repeat(self.padding)
    }

    /// Write a multi-line block flush left, for art wider than the padding allows.
    pub fn block<W: Write>(&self, out: &mut W, block: impl Display) -> Result<()> {
        let text = block.to_string().split('\n').collect::<Vec<_>>().join(NEWLINE);
        write!(out, "{}{}", text, NEWLINE)?;
        out.flush()?;
        Ok(())
    }

    /// Write one padded line.
    pub fn line<W: Write>(&self, out: &mut W, text: impl Display) -> Result<()> {
        write!(out, "{}{}{}", self.pad(), text, NEWLINE)?;
        out.flush()?;
        Ok(())
    }

    /// Write an empty line.
    pub fn blank<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(NEWLINE.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Overwrite the current line in place.
    pub fn redraw<W: Write>(&self, out: &mut W, text: impl Display) -> Result<()> {
        write!(out, "\r{}{}", self.pad(), text)?;
        out.flush()?;
        Ok(())
    }

    /// Audible cue. Silently skipped when disabled.
    pub fn bell<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.bell {
            out.write_all(BELL.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    /// Clear the screen and home the cursor.
    pub fn clear<W: Write>(&self, out: &mut W) -> Result<()> {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(2, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_line_is_padded() {
        let console = Console::new(2, true);
        let mut buf = Vec::new();
        console.line(&mut buf, "Get ready...").unwrap();
        assert_eq!(output(buf), "  Get ready...\r\n");
    }

    #[test]
    fn test_redraw_returns_carriage() {
        let console = Console::new(1, true);
        let mut buf = Vec::new();
        console.redraw(&mut buf, "50%").unwrap();
        console.redraw(&mut buf, "60%").unwrap();
        assert_eq!(output(buf), "\r 50%\r 60%");
    }

    #[test]
    fn test_bell_respects_setting() {
        let mut buf = Vec::new();
        Console::new(0, true).bell(&mut buf).unwrap();
        assert_eq!(buf, b"\x07");

        let mut buf = Vec::new();
        Console::new(0, false).bell(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_block_is_not_padded() {
        let mut buf = Vec::new();
        Console::new(2, false).block(&mut buf, "ab\ncd").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ab\r\ncd\r\n");
    }

    #[test]
    fn test_inert_guard() {
        let guard = RawModeGuard::inert();
        assert!(!guard.is_active());
    }
}
