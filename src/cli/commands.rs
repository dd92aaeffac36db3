//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - launch: reflex test, module prompt, animations, open the calculator
//! - record: show or reset the best reaction time
//! - modules: list module identifiers
//! - url: print the launch URL for given modules

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Weldlaunch - terminal launcher for the Welding World calculator
#[derive(Parser, Debug)]
#[command(name = "weldlaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the calculator base URL
    #[arg(long, global = true, env = "WELDLAUNCH_BASE_URL")]
    pub base_url: Option<String>,

    /// Disable terminal bell cues
    #[arg(long, global = true)]
    pub no_bell: bool,

    /// Print the launch URL instead of opening it
    #[arg(long, global = true)]
    pub no_open: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the security check and launch the calculator (default)
    Launch,

    /// Show the best reaction time
    Record {
        /// Delete the stored record
        #[arg(short, long)]
        reset: bool,
    },

    /// List available modules
    Modules,

    /// Print the launch URL for the given modules
    Url {
        /// Module identifiers, in fragment order
        #[arg(required = true)]
        modules: Vec<String>,
    },
}
