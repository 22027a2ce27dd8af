use mapedit_catalog::{Catalog, ToolId};
use mapedit_grid::Grid;
use serde::{Deserialize, Serialize};

/// A single cell mutation emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Paint { row: usize, col: usize, tool: ToolId },
    Erase { row: usize, col: usize },
}

impl Command {
    /// The cell this command targets.
    #[must_use]
    pub fn cell(&self) -> (usize, usize) {
        match *self {
            Command::Paint { row, col, .. } | Command::Erase { row, col } => (row, col),
        }
    }

    /// Applies the command, returning the new grid.
    #[must_use]
    pub fn apply(&self, grid: &Grid, catalog: &Catalog) -> Grid {
        match self {
            Command::Paint { row, col, tool } => grid.paint(catalog, *row, *col, tool.as_str()),
            Command::Erase { row, col } => grid.erase(*row, *col),
        }
    }
}
