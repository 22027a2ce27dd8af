//! Level grid model for MapEdit.
//!
//! A [`Grid`] is a rectangular, row-major collection of [`Cell`]s. Each cell
//! has two independent layers:
//! - terrain: at most one terrain tool id (dense `tiles` matrix on export)
//! - entity: at most one entity tool id (sparse `objects` list on export)
//!
//! Mutations (`paint`, `erase`, `resize`, `reset`) never modify the grid they
//! are called on; they return the new grid, which the caller keeps as the
//! authoritative state.

mod cell;
mod grid;

pub use cell::Cell;
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TILE_SIZE, Grid, GridStats};

/// Result type for grid construction.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised when a grid cannot be allocated with the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive (got {rows} rows x {cols} cols)")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("grid of {rows} rows x {cols} cols has too many cells")]
    TooLarge { rows: usize, cols: usize },
}
