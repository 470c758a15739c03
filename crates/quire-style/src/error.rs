//! Error types for the style crate.
//!
//! Only loading boundaries (theme YAML, theme directories) produce errors.
//! Color math and style derivation never fail: a color that cannot be parsed
//! is "not analyzable" and callers substitute a documented default.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing colors or loading themes.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The value is not a 3 or 6 digit hex color.
    #[error("invalid hex color '{0}': expected 3 or 6 hex digits")]
    InvalidColor(String),

    /// A theme defines a surface this crate does not know about.
    #[error("unknown surface '{surface}' in theme '{theme}'")]
    UnknownSurface { theme: String, surface: String },

    /// A surface definition has the wrong shape or an unknown attribute.
    #[error("invalid definition for surface '{surface}': {message}")]
    InvalidDefinition { surface: String, message: String },

    /// YAML parse error.
    #[error("failed to parse theme '{theme}': {message}")]
    Parse { theme: String, message: String },

    /// File loading error.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;
