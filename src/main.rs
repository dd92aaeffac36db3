use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use std::env;
use std::fs;
use std::io::stdout;

use weldlaunch::cli::Cli;
use weldlaunch::cli::commands::Commands;
use weldlaunch::config::{Config, data_dir};
use weldlaunch::game::ReactionGame;
use weldlaunch::highscore::HighScoreStore;
use weldlaunch::launcher::{LaunchOutcome, LaunchSettings, Launcher, NoopOpener, SystemOpener, UrlOpener, build_launch_url};
use weldlaunch::modules::{Module, ModuleSelection};
use weldlaunch::progress::ProgressAnimator;
use weldlaunch::prompt::InlinePrompt;
use weldlaunch::terminal::{Console, CrosstermKeys};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = data_dir().join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("weldlaunch.log");

    // Log to a file so output never lands in the middle of an animation
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Config is not loaded yet; start permissive and narrow once it is
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Level from `-v` or the config's `log-level`, unless RUST_LOG is set.
fn resolve_log_level(verbose: bool, configured: Option<&str>, rust_log_set: bool) -> Option<LevelFilter> {
    if rust_log_set {
        return None;
    }
    if verbose {
        return Some(LevelFilter::Debug);
    }
    Some(configured.and_then(|level| level.parse().ok()).unwrap_or(LevelFilter::Info))
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if cli.no_bell {
        config.bell = false;
    }
    if cli.no_open {
        config.open_browser = false;
    }
}

async fn run_application(cli: &Cli, config: &Config) -> Result<i32> {
    info!("Starting application");

    match cli.command.clone().unwrap_or(Commands::Launch) {
        Commands::Launch => {
            if config.open_browser {
                handle_launch_command(config, SystemOpener).await
            } else {
                handle_launch_command(config, NoopOpener).await
            }
        }
        Commands::Record { reset } => handle_record_command(reset, config),
        Commands::Modules => handle_modules_command(),
        Commands::Url { modules } => handle_url_command(&modules, config),
    }
}

async fn handle_launch_command<O: UrlOpener>(config: &Config, opener: O) -> Result<i32> {
    let console = Console::new(config.padding, config.bell);
    let store = HighScoreStore::new(&config.highscore_path);
    let game = ReactionGame::new(store, console, config.game_timing());
    let animator = ProgressAnimator::new(console, config.progress_timing());
    let settings = LaunchSettings {
        base_url: config.base_url.clone(),
        raw_mode: true,
        welcome_char_ms: config.timing.welcome_char_ms,
    };

    let mut launcher = Launcher::new(console, game, InlinePrompt, animator, opener, settings);
    let mut out = stdout();

    let result = match CrosstermKeys::new() {
        Ok(mut keys) => launcher.run(&mut out, &mut keys).await,
        Err(e) => Err(e),
    };
    Ok(launch_exit_code(result))
}

/// Launch failures end the process quietly: logged, never reported on screen.
fn launch_exit_code(result: weldlaunch::Result<LaunchOutcome>) -> i32 {
    match result {
        Ok(outcome) => {
            info!("Launch finished: {:?}", outcome);
            outcome.exit_code()
        }
        Err(e) => {
            warn!("Launch stopped: {}", e);
            1
        }
    }
}

fn handle_record_command(reset: bool, config: &Config) -> Result<i32> {
    let store = HighScoreStore::new(&config.highscore_path);
    if reset {
        store.reset().context("Failed to reset record")?;
        println!("{}", "Record cleared".yellow());
        return Ok(0);
    }
    match store.load() {
        Some(best) => println!("{} {}ms", "CURRENT RECORD:".green(), best),
        None => println!("{}", "No record yet".bright_black()),
    }
    Ok(0)
}

fn handle_modules_command() -> Result<i32> {
    for module in Module::ALL {
        println!("{:<10} {}", module.id().cyan(), module.display_name());
    }
    Ok(0)
}

fn handle_url_command(ids: &[String], config: &Config) -> Result<i32> {
    let selection = ModuleSelection::parse(ids).context("Invalid module selection")?;
    println!("{}", build_launch_url(&config.base_url, &selection));
    Ok(0)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    setup_logging().context("Failed to setup logging")?;

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_overrides(&cli, &mut config);

    if let Some(level) = resolve_log_level(
        cli.is_verbose(),
        config.log_level.as_deref(),
        env::var_os("RUST_LOG").is_some(),
    ) {
        log::set_max_level(level);
    }

    info!("Starting with config from: {:?}", cli.config);
    config.validate().context("Invalid configuration")?;

    // Run the main application logic
    let code = run_application(&cli, &config).await.context("Application failed")?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_log_level() {
        assert_eq!(resolve_log_level(false, None, false), Some(LevelFilter::Info));
        assert_eq!(resolve_log_level(false, Some("warn"), false), Some(LevelFilter::Warn));
        assert_eq!(resolve_log_level(true, Some("warn"), false), Some(LevelFilter::Debug));
        assert_eq!(resolve_log_level(false, Some("nonsense"), false), Some(LevelFilter::Info));
        assert_eq!(resolve_log_level(true, Some("warn"), true), None);
    }

    #[test]
    fn test_launch_errors_exit_quietly() {
        let err = weldlaunch::LauncherError::Terminal("stdin is not a terminal".to_string());
        assert_eq!(launch_exit_code(Err(err)), 1);

        let io_err = std::io::Error::new(std::io::ErrorKind::StorageFull, "No space left on device");
        assert_eq!(launch_exit_code(Err(io_err.into())), 1);
    }

    #[test]
    fn test_launch_outcome_exit_codes() {
        let launched = LaunchOutcome::Launched {
            url: "http://localhost:3000/#ai".to_string(),
        };
        assert_eq!(launch_exit_code(Ok(launched)), 0);
        assert_eq!(launch_exit_code(Ok(LaunchOutcome::Cancelled)), 0);
    }

    #[test]
    fn test_overrides_applied() {
        let cli = Cli::parse_from(["weldlaunch", "--base-url", "https://example.com/calc", "--no-bell", "--no-open"]);
        let mut config = Config::default();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.base_url, "https://example.com/calc");
        assert!(!config.bell);
        assert!(!config.open_browser);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::parse_from(["weldlaunch"]);
        let mut config = Config {
            base_url: "https://calc.example.com".to_string(),
            ..Default::default()
        };
        apply_overrides(&cli, &mut config);
        if cli.base_url.is_none() {
            assert_eq!(config.base_url, "https://calc.example.com");
        }
        assert!(config.bell);
        assert!(config.open_browser);
    }
}
