//! Error types for the editing session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested tool is not in the catalog.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// An imported document was rejected.
    #[error("invalid level document: {0}")]
    Format(#[from] mapedit_format::FormatError),

    /// Requested dimensions are not usable.
    #[error("invalid grid: {0}")]
    Grid(#[from] mapedit_grid::GridError),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
