//! CLI module for weldlaunch - command-line interface and subcommands.
//!
//! With no subcommand the full launch sequence runs.

pub mod commands;

pub use commands::Cli;
