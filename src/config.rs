//! Launcher configuration.
//!
//! Loaded from ./.weldlaunch.yml or ~/.config/weldlaunch/weldlaunch.yml

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::game::GameTiming;
use crate::progress::ProgressTiming;

const PROJECT: &str = "weldlaunch";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Default log filter when RUST_LOG is unset.
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Calculator service the launch URL points at.
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Best-time file.
    #[serde(rename = "highscore-path")]
    pub highscore_path: PathBuf,

    /// Emit terminal bell cues.
    pub bell: bool,

    /// Left padding for every line.
    pub padding: usize,

    /// Open the URL in the default viewer (otherwise only print it).
    #[serde(rename = "open-browser")]
    pub open_browser: bool,

    pub timing: TimingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            base_url: DEFAULT_BASE_URL.to_string(),
            highscore_path: data_dir().join("highscore.json"),
            bell: true,
            padding: 2,
            open_browser: true,
            timing: TimingConfig::default(),
        }
    }
}

/// Launcher data directory (~/.local/share/weldlaunch on Linux).
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(PROJECT)
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .weldlaunch.yml in current directory
    /// 3. ~/.config/weldlaunch/weldlaunch.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_config = PathBuf::from(format!(".{}.yml", PROJECT));
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from {}", project_config.display());
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", project_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(PROJECT).join(format!("{}.yml", PROJECT));
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).context(format!("base-url is not a valid URL: {}", self.base_url))?;
        if url.cannot_be_a_base() {
            eyre::bail!("base-url must be a hierarchical URL: {}", self.base_url);
        }
        if url.fragment().is_some() {
            eyre::bail!("base-url must not carry a fragment: {}", self.base_url);
        }
        if self.timing.draw_delay_min_ms >= self.timing.draw_delay_max_ms {
            eyre::bail!("timing.draw-delay-min-ms must be < timing.draw-delay-max-ms");
        }
        Ok(())
    }

    pub fn game_timing(&self) -> GameTiming {
        GameTiming {
            header_char_ms: self.timing.header_char_ms,
            draw_delay_min_ms: self.timing.draw_delay_min_ms,
            draw_delay_max_ms: self.timing.draw_delay_max_ms,
            settle_ms: self.timing.settle_ms,
        }
    }

    pub fn progress_timing(&self) -> ProgressTiming {
        ProgressTiming {
            checklist_step_ms: self.timing.checklist_step_ms,
            checklist_pause_ms: self.timing.checklist_pause_ms,
            power_step_ms: self.timing.power_step_ms,
        }
    }
}

/// Delays, all in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    #[serde(rename = "header-char-ms")]
    pub header_char_ms: u64,

    #[serde(rename = "welcome-char-ms")]
    pub welcome_char_ms: u64,

    #[serde(rename = "draw-delay-min-ms")]
    pub draw_delay_min_ms: u64,

    #[serde(rename = "draw-delay-max-ms")]
    pub draw_delay_max_ms: u64,

    #[serde(rename = "settle-ms")]
    pub settle_ms: u64,

    #[serde(rename = "checklist-step-ms")]
    pub checklist_step_ms: u64,

    #[serde(rename = "checklist-pause-ms")]
    pub checklist_pause_ms: u64,

    #[serde(rename = "power-step-ms")]
    pub power_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let game = GameTiming::default();
        let progress = ProgressTiming::default();
        Self {
            header_char_ms: game.header_char_ms,
            welcome_char_ms: 5,
            draw_delay_min_ms: game.draw_delay_min_ms,
            draw_delay_max_ms: game.draw_delay_max_ms,
            settle_ms: game.settle_ms,
            checklist_step_ms: progress.checklist_step_ms,
            checklist_pause_ms: progress.checklist_pause_ms,
            power_step_ms: progress.power_step_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.padding, 2);
        assert!(config.bell);
        assert_eq!(config.timing.draw_delay_min_ms, 2000);
        assert_eq!(config.timing.draw_delay_max_ms, 5000);
        assert_eq!(config.timing.checklist_step_ms, 40);
        assert_eq!(config.timing.power_step_ms, 50);
        assert!(config.highscore_path.ends_with("weldlaunch/highscore.json"));
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            base_url: "https://example.com/calc#already".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_draw_window() {
        let config = Config {
            timing: TimingConfig {
                draw_delay_min_ms: 5000,
                draw_delay_max_ms: 2000,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
base-url: https://calc.example.com
bell: false
timing:
  draw-delay-min-ms: 1000
  power-step-ms: 10
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_url, "https://calc.example.com");
        assert!(!config.bell);
        assert_eq!(config.timing.draw_delay_min_ms, 1000);
        assert_eq!(config.timing.power_step_ms, 10);
        // Other fields should have defaults
        assert_eq!(config.timing.draw_delay_max_ms, 5000);
        assert_eq!(config.padding, 2);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "base-url: https://example.com/calc\npadding: 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "https://example.com/calc");
        assert_eq!(config.padding, 0);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_timing_conversion() {
        let config = Config::default();
        assert_eq!(config.game_timing(), GameTiming::default());
        assert_eq!(config.progress_timing(), ProgressTiming::default());
    }
}
