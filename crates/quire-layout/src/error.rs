//! Error types for layout catalogs.
//!
//! Errors only come from loading and validating catalog data. Resolution
//! itself never fails: catalog misses and degenerate geometry fall back to
//! documented defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or validating layout data.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A grid-area row references an unknown region or is malformed.
    #[error("invalid grid areas: {0}")]
    InvalidGrid(String),

    /// A template violates a structural rule.
    #[error("invalid template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    /// A line-style catalog entry is malformed or duplicated.
    #[error("invalid line style '{id}': {message}")]
    InvalidLineStyle { id: String, message: String },

    /// YAML parse error.
    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    /// A template file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
