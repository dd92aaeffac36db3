//! Reaction game state machine.
//!
//! Pure transitions, no I/O. The async driver in `reaction` feeds it timer
//! and key events in whatever order they win the race.

use tokio::time::Instant;

use crate::terminal::GameKey;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Trigger pressed before the draw signal
    TooEarly,
    /// Trigger pressed after the draw signal
    Success { reaction_ms: u64 },
    /// Quit key or interrupt
    Aborted,
}

impl GameOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GameOutcome::Success { .. })
    }
}

/// Game phase. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Timer pending, signal not shown
    Armed,
    /// Signal shown at `signal_at`
    Waiting { signal_at: Instant },
    Done(GameOutcome),
}

#[derive(Debug, Clone)]
pub struct ReactionMachine {
    phase: Phase,
}

impl ReactionMachine {
    pub fn new() -> Self {
        Self { phase: Phase::Armed }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_armed(&self) -> bool {
        self.phase == Phase::Armed
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Draw timer elapsed. Returns true if the signal should be shown.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        if self.is_armed() {
            self.phase = Phase::Waiting { signal_at: now };
            true
        } else {
            false
        }
    }

    /// A key was pressed at `now`. Returns the outcome if the game ended.
    pub fn on_key(&mut self, key: GameKey, now: Instant) -> Option<GameOutcome> {
        let outcome = match (self.phase, key) {
            (Phase::Done(_), _) | (_, GameKey::Other) => return None,
            (_, GameKey::Quit) => GameOutcome::Aborted,
            (Phase::Armed, GameKey::Trigger) => GameOutcome::TooEarly,
            (Phase::Waiting { signal_at }, GameKey::Trigger) => GameOutcome::Success {
                reaction_ms: now.saturating_duration_since(signal_at).as_millis() as u64,
            },
        };
        self.phase = Phase::Done(outcome);
        Some(outcome)
    }

    /// Input closed before the game finished.
    pub fn on_input_closed(&mut self) -> GameOutcome {
        if let Phase::Done(outcome) = self.phase {
            return outcome;
        }
        self.phase = Phase::Done(GameOutcome::Aborted);
        GameOutcome::Aborted
    }
}

impl Default for ReactionMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_trigger_while_armed_is_too_early() {
        let mut m = ReactionMachine::new();
        let outcome = m.on_key(GameKey::Trigger, Instant::now());
        assert_eq!(outcome, Some(GameOutcome::TooEarly));
        assert_eq!(m.outcome(), Some(GameOutcome::TooEarly));
    }

    #[test]
    fn test_trigger_after_signal_measures_reaction() {
        let mut m = ReactionMachine::new();
        let signal = Instant::now();
        assert!(m.on_timer(signal));
        let outcome = m.on_key(GameKey::Trigger, signal + Duration::from_millis(250));
        assert_eq!(outcome, Some(GameOutcome::Success { reaction_ms: 250 }));
    }

    #[test]
    fn test_trigger_at_signal_instant_is_success() {
        let mut m = ReactionMachine::new();
        let signal = Instant::now();
        m.on_timer(signal);
        assert_eq!(
            m.on_key(GameKey::Trigger, signal),
            Some(GameOutcome::Success { reaction_ms: 0 })
        );
    }

    #[test]
    fn test_press_classification_by_time() {
        let base = Instant::now();
        let signal_at = base + Duration::from_millis(3000);
        for press_ms in [0u64, 1500, 2999, 3000, 3001, 4200] {
            let press = base + Duration::from_millis(press_ms);
            let mut m = ReactionMachine::new();
            if press >= signal_at {
                m.on_timer(signal_at);
            }
            let outcome = m.on_key(GameKey::Trigger, press).unwrap();
            if press_ms < 3000 {
                assert_eq!(outcome, GameOutcome::TooEarly);
            } else {
                assert_eq!(outcome, GameOutcome::Success { reaction_ms: press_ms - 3000 });
            }
        }
    }

    #[test]
    fn test_quit_aborts_in_any_live_phase() {
        let mut armed = ReactionMachine::new();
        assert_eq!(armed.on_key(GameKey::Quit, Instant::now()), Some(GameOutcome::Aborted));

        let mut waiting = ReactionMachine::new();
        waiting.on_timer(Instant::now());
        assert_eq!(waiting.on_key(GameKey::Quit, Instant::now()), Some(GameOutcome::Aborted));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut m = ReactionMachine::new();
        assert_eq!(m.on_key(GameKey::Other, Instant::now()), None);
        assert!(m.is_armed());
    }

    #[test]
    fn test_done_is_terminal() {
        let mut m = ReactionMachine::new();
        m.on_key(GameKey::Trigger, Instant::now());
        assert!(!m.on_timer(Instant::now()));
        assert_eq!(m.on_key(GameKey::Quit, Instant::now()), None);
        assert_eq!(m.on_input_closed(), GameOutcome::TooEarly);
    }

    #[test]
    fn test_timer_fires_once() {
        let mut m = ReactionMachine::new();
        let first = Instant::now();
        assert!(m.on_timer(first));
        assert!(!m.on_timer(first + Duration::from_millis(10)));
        assert_eq!(m.phase(), Phase::Waiting { signal_at: first });
    }

    #[test]
    fn test_input_closed_aborts() {
        let mut m = ReactionMachine::new();
        assert_eq!(m.on_input_closed(), GameOutcome::Aborted);
    }
}
