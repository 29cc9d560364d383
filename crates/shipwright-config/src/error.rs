//! Error types for the config crate.

use thiserror::Error;

/// Errors that can occur when reading or writing theme configurations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input is not valid TOML.
    #[error("invalid TOML syntax: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to generate TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its root is not a table.
    #[error("configuration root must be a table, got {found}")]
    NotATable { found: &'static str },
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
