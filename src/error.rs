//! Error types for weldlaunch
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in weldlaunch
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Terminal could not be configured or read
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// High-score persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Module selection was rejected
    #[error("Selection error: {0}")]
    Selection(String),

    /// URL could not be handed to the system viewer
    #[error("Launch error: {0}")]
    Launch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for weldlaunch operations
pub type Result<T> = std::result::Result<T, LauncherError>;
