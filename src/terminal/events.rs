//! Key sources.
//!
//! - `KeySource`: async stream of key presses
//! - `CrosstermKeys`: reads the real terminal
//! - `ScriptedKeys`: replays presses at fixed times, for tests and demos

use async_trait::async_trait;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use futures::StreamExt;
use std::collections::VecDeque;
use std::io::{IsTerminal, stdin};
use std::time::Duration;
use tokio::time::{Instant, sleep_until};

use super::input::KeyEvent;
use crate::error::{LauncherError, Result};

/// Source of key presses.
///
/// `next_key` must be cancel-safe: dropping the future before it resolves
/// must not lose a key.
#[async_trait]
pub trait KeySource: Send {
    /// Next key press, or `None` once input is closed.
    async fn next_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Key presses from the terminal via crossterm's event stream.
pub struct CrosstermKeys {
    stream: EventStream,
}

impl CrosstermKeys {
    /// Open the terminal event stream.
    ///
    /// Fails with `LauncherError::Terminal` when stdin is not a terminal,
    /// since crossterm has no reader to attach to in that case.
    pub fn new() -> Result<Self> {
        require_terminal(stdin().is_terminal())?;
        Ok(Self {
            stream: EventStream::new(),
        })
    }
}

fn require_terminal(is_terminal: bool) -> Result<()> {
    if !is_terminal {
        return Err(LauncherError::Terminal("stdin is not a terminal".to_string()));
    }
    Ok(())
}

#[async_trait]
impl KeySource for CrosstermKeys {
    async fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        while let Some(event) = self.stream.next().await {
            match event.map_err(|e| LauncherError::Terminal(e.to_string()))? {
                // Only handle key press events, not release
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(key.into()));
                }
                _ => continue,
            }
        }
        Ok(None)
    }
}

/// Replays key presses at fixed offsets from creation.
///
/// Offsets are absolute, so a cancelled `next_key` resumes waiting for the
/// same press instead of restarting its delay.
pub struct ScriptedKeys {
    origin: Instant,
    script: VecDeque<(Duration, KeyEvent)>,
}

impl ScriptedKeys {
    pub fn new(script: impl IntoIterator<Item = (Duration, KeyEvent)>) -> Self {
        Self {
            origin: Instant::now(),
            script: script.into_iter().collect(),
        }
    }

    /// Presses that have not been delivered yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl KeySource for ScriptedKeys {
    async fn next_key(&mut self) -> Result<Option<KeyEvent>> {
        let Some(&(at, _)) = self.script.front() else {
            return Ok(None);
        };
        sleep_until(self.origin + at).await;
        Ok(self.script.pop_front().map(|(_, key)| key))
    }
}
