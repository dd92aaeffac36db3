//! Human reflex test.
//!
//! The player waits for a randomly delayed "DRAW!" signal and presses SPACE.
//! `state` holds the pure state machine, `reaction` the async driver that
//! races the draw timer against key input.

mod reaction;
mod state;

pub use reaction::{GameTiming, ReactionGame};
pub use state::{GameOutcome, Phase, ReactionMachine};
