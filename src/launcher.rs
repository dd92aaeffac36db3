//! Launch sequence.
//!
//! Reflex test, welcome screen, module prompt, initialization animations,
//! then hand the calculator URL to the system viewer.

use async_trait::async_trait;
use colored::{Color, Colorize};
use log::{info, warn};
use std::io::Write;
use std::process::Stdio;
use tokio::process::Command;

use crate::art;
use crate::error::{LauncherError, Result};
use crate::game::{GameOutcome, ReactionGame};
use crate::modules::ModuleSelection;
use crate::progress::ProgressAnimator;
use crate::prompt::ModuleSelector;
use crate::terminal::{Console, KeySource, RawModeGuard};
use crate::typewriter::Typewriter;

/// `{base}/#{id1}&{id2}...`, with any trailing slash on `base` dropped.
pub fn build_launch_url(base_url: &str, selection: &ModuleSelection) -> String {
    format!("{}/#{}", base_url.trim_end_matches('/'), selection.fragment())
}

/// Opens a URL in the user's default viewer.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's launcher command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        let (program, args) = open_command(std::env::consts::OS, url);
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

/// Program and arguments that open `url` on `os` (a `std::env::consts::OS` value).
fn open_command(os: &str, url: &str) -> (&'static str, Vec<String>) {
    match os {
        "macos" => ("open", vec![url.to_string()]),
        "windows" => (
            "cmd",
            vec!["/C".to_string(), "start".to_string(), String::new(), escape_for_cmd(url)],
        ),
        _ => ("xdg-open", vec![url.to_string()]),
    }
}

/// Caret-escape the characters cmd.exe treats as operators, `&` above all.
fn escape_for_cmd(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len());
    for ch in arg.chars() {
        if matches!(ch, '^' | '&' | '|' | '<' | '>') {
            escaped.push('^');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl UrlOpener for SystemOpener {
    async fn open(&self, url: &str) -> Result<()> {
        let status = Self::command(url).status().await?;
        if !status.success() {
            return Err(LauncherError::Launch(format!("opener exited with {}", status)));
        }
        Ok(())
    }
}

/// Leaves the URL on screen without opening anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

#[async_trait]
impl UrlOpener for NoopOpener {
    async fn open(&self, url: &str) -> Result<()> {
        info!("Open disabled, not launching {}", url);
        Ok(())
    }
}

/// How a launch run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// URL handed to the opener
    Launched { url: String },
    /// Reflex test did not succeed
    GameEnded(GameOutcome),
    /// User quit the module prompt
    Cancelled,
}

impl LaunchOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::GameEnded(GameOutcome::TooEarly) => 1,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub base_url: String,
    /// Put the terminal in raw mode while reading keys
    pub raw_mode: bool,
    pub welcome_char_ms: u64,
}

pub struct Launcher<S: ModuleSelector, O: UrlOpener> {
    console: Console,
    game: ReactionGame,
    selector: S,
    animator: ProgressAnimator,
    opener: O,
    settings: LaunchSettings,
}

impl<S: ModuleSelector, O: UrlOpener> Launcher<S, O> {
    pub fn new(
        console: Console,
        game: ReactionGame,
        selector: S,
        animator: ProgressAnimator,
        opener: O,
        settings: LaunchSettings,
    ) -> Self {
        Self {
            console,
            game,
            selector,
            animator,
            opener,
            settings,
        }
    }

    fn raw_mode(&self) -> Result<RawModeGuard> {
        if self.settings.raw_mode {
            RawModeGuard::acquire()
        } else {
            Ok(RawModeGuard::inert())
        }
    }

    /// Run the whole sequence.
    pub async fn run<W: Write>(&mut self, out: &mut W, keys: &mut dyn KeySource) -> Result<LaunchOutcome> {
        self.console.clear(out)?;
        self.game.intro(out).await?;
        let outcome = {
            let _raw = self.raw_mode()?;
            let delay = self.game.timing().random_draw_delay();
            self.game.play(out, keys, delay).await?
        };
        if !outcome.is_success() {
            return Ok(LaunchOutcome::GameEnded(outcome));
        }

        self.welcome(out).await?;

        let selection = {
            let _raw = self.raw_mode()?;
            self.selector.select(keys).await?
        };
        let Some(selection) = selection else {
            info!("Module selection cancelled");
            return Ok(LaunchOutcome::Cancelled);
        };

        self.animator.run_checklist(out, &selection).await?;
        self.animator.run_power_bar(out).await?;

        let url = build_launch_url(&self.settings.base_url, &selection);
        self.console.blank(out)?;
        self.console
            .line(out, "System Fully Operational. Launching Interface...".cyan())?;
        self.console.line(out, url.as_str().bright_black())?;

        info!("Launching {}", url);
        if let Err(e) = self.opener.open(&url).await {
            warn!("Failed to open {}: {}", url, e);
        }
        Ok(LaunchOutcome::Launched { url })
    }

    async fn welcome<W: Write>(&self, out: &mut W) -> Result<()> {
        self.console.clear(out)?;
        self.console.block(out, art::banner().cyan())?;
        Typewriter::new(self.settings.welcome_char_ms)
            .with_color(Color::Cyan)
            .type_line(out, &self.console, art::WELCOME)
            .await?;
        self.console.blank(out)?;
        Ok(())
    }
}
