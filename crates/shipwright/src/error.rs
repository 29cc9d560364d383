//! Error types for editor sessions.

use shipwright_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while editing themes.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Imported or exported configuration could not be converted.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No saved or preset theme has this id.
    #[error("no theme with id '{0}'")]
    ThemeNotFound(String),

    /// No color scheme has this name.
    #[error("unknown color scheme '{0}'")]
    UnknownScheme(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
