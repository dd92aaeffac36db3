//! Weldlaunch - terminal launcher for the Welding World calculator service
//!
//! Shows the branding, runs a reflex-test "security check", lets the user pick
//! calculator modules, animates their initialization and opens the calculator
//! with the selection encoded in the URL fragment.

pub mod art;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod highscore;
pub mod launcher;
pub mod modules;
pub mod progress;
pub mod prompt;
pub mod terminal;
pub mod typewriter;

pub use error::{LauncherError, Result};
