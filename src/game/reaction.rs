//! Reaction game driver.
//!
//! Races the draw timer against the key source and feeds whichever wins into
//! the `ReactionMachine`. The timer is only polled while the machine is armed
//! and is dropped as soon as the game ends.

use colored::{Color, Colorize};
use log::info;
use rand::Rng;
use std::io::Write;
use std::time::Duration;
use tokio::time::{Instant, sleep};

use super::state::{GameOutcome, ReactionMachine};
use crate::error::Result;
use crate::highscore::HighScoreStore;
use crate::terminal::{Console, GameKey, KeySource};
use crate::typewriter::Typewriter;

const DRAW_SIGNAL: &str = "  DRAW!  ";

/// Timing knobs for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTiming {
    /// Typewriter delay for the header lines
    pub header_char_ms: u64,
    /// Lower bound (inclusive) of the random draw delay
    pub draw_delay_min_ms: u64,
    /// Upper bound (exclusive) of the random draw delay
    pub draw_delay_max_ms: u64,
    /// Pause after a successful reaction before returning
    pub settle_ms: u64,
}

impl Default for GameTiming {
    fn default() -> Self {
        Self {
            header_char_ms: 10,
            draw_delay_min_ms: 2000,
            draw_delay_max_ms: 5000,
            settle_ms: 1000,
        }
    }
}

impl GameTiming {
    /// Uniform draw in `[min, max)`. Collapses to `min` on an empty range.
    pub fn random_draw_delay(&self) -> Duration {
        let ms = if self.draw_delay_min_ms < self.draw_delay_max_ms {
            rand::rng().random_range(self.draw_delay_min_ms..self.draw_delay_max_ms)
        } else {
            self.draw_delay_min_ms
        };
        Duration::from_millis(ms)
    }
}

/// The "security check" reflex test.
pub struct ReactionGame {
    store: HighScoreStore,
    console: Console,
    timing: GameTiming,
}

impl ReactionGame {
    pub fn new(store: HighScoreStore, console: Console, timing: GameTiming) -> Self {
        Self { store, console, timing }
    }

    pub fn store(&self) -> &HighScoreStore {
        &self.store
    }

    pub fn timing(&self) -> &GameTiming {
        &self.timing
    }

    /// Play one game with a random draw delay.
    pub async fn run<W: Write, K: KeySource + ?Sized>(&self, out: &mut W, keys: &mut K) -> Result<GameOutcome> {
        let delay = self.timing.random_draw_delay();
        self.run_with_delay(out, keys, delay).await
    }

    /// Play one game with a fixed draw delay.
    pub async fn run_with_delay<W: Write, K: KeySource + ?Sized>(
        &self,
        out: &mut W,
        keys: &mut K,
        delay: Duration,
    ) -> Result<GameOutcome> {
        self.intro(out).await?;
        self.play(out, keys, delay).await
    }

    /// Type the header and the current record. Reads no keys.
    pub async fn intro<W: Write>(&self, out: &mut W) -> Result<()> {
        let best = self.store.load();
        self.print_header(out, best).await
    }

    /// Race the draw signal against the keys, then show the outcome.
    pub async fn play<W: Write, K: KeySource + ?Sized>(
        &self,
        out: &mut W,
        keys: &mut K,
        delay: Duration,
    ) -> Result<GameOutcome> {
        info!("Reaction game armed, draw in {:?}", delay);
        let outcome = self.race(out, keys, delay).await?;
        info!("Reaction game finished: {:?}", outcome);

        match outcome {
            GameOutcome::TooEarly => {
                self.console.blank(out)?;
                self.console.line(out, "TOO EARLY! Validation failed.".red())?;
            }
            GameOutcome::Success { reaction_ms } => {
                self.console.blank(out)?;
                self.console
                    .line(out, format!("NICE! Reaction: {}ms", reaction_ms).green())?;
                self.console.bell(out)?;
                if self.store.record_if_better(reaction_ms) {
                    self.console.line(out, "*** NEW RECORD! ***".yellow().bold())?;
                    self.console.bell(out)?;
                }
                sleep(Duration::from_millis(self.timing.settle_ms)).await;
            }
            GameOutcome::Aborted => {}
        }

        Ok(outcome)
    }

    async fn print_header<W: Write>(&self, out: &mut W, best: Option<u64>) -> Result<()> {
        let typewriter = Typewriter::new(self.timing.header_char_ms).with_color(Color::Cyan);
        typewriter
            .type_line(out, &self.console, "SECURITY CHECK: HUMAN REFLEX TEST")
            .await?;
        typewriter
            .type_line(out, &self.console, "Wait for signal \"DRAW!\", then press SPACE.")
            .await?;
        if let Some(best) = best {
            self.console
                .line(out, format!("CURRENT RECORD: {}ms", best).bright_black())?;
        }
        self.console.line(out, "Get ready...".bright_black())?;
        Ok(())
    }

    async fn race<W: Write, K: KeySource + ?Sized>(
        &self,
        out: &mut W,
        keys: &mut K,
        delay: Duration,
    ) -> Result<GameOutcome> {
        let mut machine = ReactionMachine::new();
        let timer = sleep(delay);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                // Timer first: a press at the signal instant counts as a reaction.
                biased;

                _ = &mut timer, if machine.is_armed() => {
                    if machine.on_timer(Instant::now()) {
                        self.console.blank(out)?;
                        self.console.line(out, DRAW_SIGNAL.white().bold().on_red())?;
                        self.console.bell(out)?;
                    }
                }
                key = keys.next_key() => {
                    let Some(key) = key? else {
                        return Ok(machine.on_input_closed());
                    };
                    if let Some(outcome) = machine.on_key(GameKey::from(&key), Instant::now()) {
                        return Ok(outcome);
                    }
                }
            }
        }
    }
}
