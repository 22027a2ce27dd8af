//! The grid itself and its mutation operations.

use crate::cell::Cell;
use crate::{GridError, Result};
use mapedit_catalog::{Catalog, ToolCategory, ToolId, ToolKind};
use tracing::debug;

/// Default pixel edge of a cell.
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Default number of rows (blocks high).
pub const DEFAULT_ROWS: usize = 15;
/// Default number of columns (blocks wide).
pub const DEFAULT_COLS: usize = 100;

/// A rectangular two-layer level grid.
///
/// Cells are stored row-major in a single vector, so every row always has
/// exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tile_size: u32,
    cells: Vec<Cell>,
}

/// Occupancy counts for a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridStats {
    pub cells: usize,
    pub terrain_cells: usize,
    pub entity_cells: usize,
    pub stacked_cells: usize,
}

impl GridStats {
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.cells - (self.terrain_cells + self.entity_cells - self.stacked_cells)
    }
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(rows: usize, cols: usize, tile_size: u32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        if tile_size == 0 {
            return Err(GridError::ZeroTileSize);
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&len| {
                len.checked_mul(std::mem::size_of::<Cell>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            tile_size,
            cells: vec![Cell::empty(); len],
        })
    }

    /// Creates the empty 100 x 15 grid the editor starts with.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tile_size: DEFAULT_TILE_SIZE,
            cells: vec![Cell::empty(); DEFAULT_ROWS * DEFAULT_COLS],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Width of the level in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> u64 {
        self.cols as u64 * u64::from(self.tile_size)
    }

    /// Returns true if `(row, col)` addresses a cell.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col).then(|| row * self.cols + col)
    }

    /// Returns the cell at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Returns one row of cells.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    // ── Coordinate conversion ────────────────────────────────────

    /// Pixel-space top-left corner of a cell.
    #[must_use]
    pub fn pixel_origin(&self, row: usize, col: usize) -> (u64, u64) {
        let size = u64::from(self.tile_size);
        (col as u64 * size, row as u64 * size)
    }

    /// The cell containing pixel `(x, y)`, if any.
    #[must_use]
    pub fn cell_at_pixel(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let size = f64::from(self.tile_size);
        let col = (x / size).floor();
        let row = (y / size).floor();
        if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        self.contains(row, col).then_some((row, col))
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Paints `tool_id` into the layer matching its category.
    ///
    /// Out-of-bounds coordinates, unknown ids and the eraser leave the grid
    /// unchanged. The other layer is never touched.
    #[must_use]
    pub fn paint(&self, catalog: &Catalog, row: usize, col: usize, tool_id: &str) -> Self {
        let mut next = self.clone();
        let Some(index) = self.index(row, col) else {
            debug!("paint at ({}, {}) is outside {}x{} grid", row, col, self.rows, self.cols);
            return next;
        };
        let Some(tool) = catalog.lookup_by_id(tool_id) else {
            debug!("paint with unknown tool {:?} ignored", tool_id);
            return next;
        };

        let cell = &mut next.cells[index];
        match tool.kind {
            ToolKind::Terrain { .. } => cell.terrain = Some(tool.id.clone()),
            ToolKind::Entity { .. } => cell.entity = Some(tool.id.clone()),
            ToolKind::Eraser => debug!("eraser is not paintable; use erase"),
        }
        next
    }

    /// Clears both layers of a cell.
    #[must_use]
    pub fn erase(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        match self.index(row, col) {
            Some(index) => next.cells[index] = Cell::empty(),
            None => debug!("erase at ({}, {}) is outside {}x{} grid", row, col, self.rows, self.cols),
        }
        next
    }

    /// Returns a grid of the new size, keeping the overlapping region.
    ///
    /// Cells outside the new bounds are dropped.
    pub fn resize(&self, new_cols: usize, new_rows: usize) -> Result<Self> {
        let mut next = Self::new(new_rows, new_cols, self.tile_size)?;
        let keep_rows = self.rows.min(new_rows);
        let keep_cols = self.cols.min(new_cols);
        for row in 0..keep_rows {
            let src = row * self.cols;
            let dst = row * new_cols;
            next.cells[dst..dst + keep_cols].clone_from_slice(&self.cells[src..src + keep_cols]);
        }
        if new_rows < self.rows || new_cols < self.cols {
            debug!(
                "resize {}x{} -> {}x{} truncated content",
                self.cols, self.rows, new_cols, new_rows
            );
        }
        Ok(next)
    }

    /// Returns an empty grid of the given size with the same tile size.
    pub fn reset(&self, rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, self.tile_size)
    }

    /// Returns an empty grid of the same size.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            tile_size: self.tile_size,
            cells: vec![Cell::empty(); self.cells.len()],
        }
    }

    // ── Raw layer access ─────────────────────────────────────────

    /// Sets the terrain layer without consulting a catalog.
    ///
    /// Returns false when `(row, col)` is out of bounds.
    pub fn set_terrain(&mut self, row: usize, col: usize, id: Option<ToolId>) -> bool {
        self.set_layer(row, col, ToolCategory::Terrain, id)
    }

    /// Sets the entity layer without consulting a catalog.
    ///
    /// Returns false when `(row, col)` is out of bounds.
    pub fn set_entity(&mut self, row: usize, col: usize, id: Option<ToolId>) -> bool {
        self.set_layer(row, col, ToolCategory::Entity, id)
    }

    fn set_layer(
        &mut self,
        row: usize,
        col: usize,
        layer: ToolCategory,
        id: Option<ToolId>,
    ) -> bool {
        let Some(index) = self.index(row, col) else {
            return false;
        };
        let cell = &mut self.cells[index];
        match layer {
            ToolCategory::Terrain => cell.terrain = id,
            ToolCategory::Entity => cell.entity = id,
        }
        true
    }

    /// Counts occupied cells per layer.
    #[must_use]
    pub fn stats(&self) -> GridStats {
        self.cells.iter().fold(
            GridStats {
                cells: self.cells.len(),
                ..GridStats::default()
            },
            |mut stats, cell| {
                stats.terrain_cells += usize::from(cell.terrain.is_some());
                stats.entity_cells += usize::from(cell.entity.is_some());
                stats.stacked_cells += usize::from(cell.is_stacked());
                stats
            },
        )
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::with_defaults()
    }
}
