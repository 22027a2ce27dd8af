//! Error types for level import/export.

use thiserror::Error;

/// Result type for format operations.
pub type Result<T> = std::result::Result<T, FormatError>;

/// Structural problems that make a document unusable as a whole.
///
/// Individual bad records never produce an error; they are dropped.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Not valid JSON, or not a JSON object.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required header field is absent, null or zero.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A header field is present but not a usable number.
    #[error("invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// `tileSize` is zero, negative, fractional or not finite.
    #[error("invalid tile size: {0}")]
    InvalidTileSize(String),

    /// `tiles` has no rows, or its first row has no cells.
    #[error("tile matrix is empty")]
    EmptyTiles,

    /// A row of `tiles` differs in length from the first row.
    #[error("tile matrix is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid error: {0}")]
    Grid(#[from] mapedit_grid::GridError),
}
