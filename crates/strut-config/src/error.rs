//! Error types for manifest loading and synthesis.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Only manifest problems are fatal: a missing or corrupt manifest yields no
/// configuration at all. Everything else downstream degrades in place.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("manifest not found")]
    NotFound,

    #[error("invalid manifest `{field}`: {hint}")]
    InvalidManifest { field: String, hint: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
