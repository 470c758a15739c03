//! Error types for document loading and saving.

use std::path::PathBuf;

use quire_layout::LayoutError;
use quire_style::StyleError;
use thiserror::Error;

/// Errors that can occur when reading settings or documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The format cannot be used for this operation (e.g. storing a document as text).
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The layout catalog has no templates to fall back to.
    #[error("layout catalog is empty")]
    EmptyCatalog,

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
