//! Grid → document.

use crate::document::{ExportedDocument, MapObject};
use crate::error::Result;
use mapedit_catalog::{Catalog, EMPTY_TERRAIN_CODE, ToolCategory};
use mapedit_grid::{Cell, Grid};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What to write into `tiles` for a cell that also emits an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainUnderEntity {
    /// Emit the real terrain code; terrain and entity stack.
    #[default]
    Keep,
    /// Emit `"0"` wherever an object is emitted.
    Suppress,
}

/// Export settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    #[serde(default)]
    pub terrain_under_entity: TerrainUnderEntity,
}

/// Converts a grid into the runtime document.
///
/// References that do not resolve to a tool of the right category are
/// written as empty: `"0"` for terrain, no object for entities.
#[must_use]
pub fn export(grid: &Grid, catalog: &Catalog, options: &ExportOptions) -> ExportedDocument {
    let mut tiles = Vec::with_capacity(grid.rows());
    let mut objects = Vec::new();

    for row in 0..grid.rows() {
        let cells = grid.row(row).unwrap_or(&[]);
        let mut codes = Vec::with_capacity(cells.len());

        for (col, cell) in cells.iter().enumerate() {
            let object = entity_object(grid, catalog, row, col, cell);
            let suppress = object.is_some()
                && options.terrain_under_entity == TerrainUnderEntity::Suppress;

            let code = if suppress {
                EMPTY_TERRAIN_CODE
            } else {
                terrain_code(catalog, cell)
            };
            codes.push(code.to_string());
            objects.extend(object);
        }
        tiles.push(codes);
    }

    info!(
        "Exported {}x{} level with {} objects",
        grid.cols(),
        grid.rows(),
        objects.len()
    );

    ExportedDocument {
        width: grid.pixel_width(),
        height: grid.rows() as u64,
        tile_size: grid.tile_size(),
        tiles,
        objects,
    }
}

fn terrain_code<'a>(catalog: &'a Catalog, cell: &Cell) -> &'a str {
    let Some(id) = cell.terrain_id() else {
        return EMPTY_TERRAIN_CODE;
    };
    match catalog
        .resolve(id, ToolCategory::Terrain)
        .and_then(|tool| tool.terrain_code())
    {
        Some(code) => code,
        None => {
            debug!("terrain reference {:?} does not resolve, writing empty", id);
            EMPTY_TERRAIN_CODE
        }
    }
}

fn entity_object(
    grid: &Grid,
    catalog: &Catalog,
    row: usize,
    col: usize,
    cell: &Cell,
) -> Option<MapObject> {
    let id = cell.entity_id()?;
    let Some(entity_type) = catalog
        .resolve(id, ToolCategory::Entity)
        .and_then(|tool| tool.entity_type())
    else {
        debug!("entity reference {:?} at ({}, {}) does not resolve, skipping", id, row, col);
        return None;
    };
    let (x, y) = grid.pixel_origin(row, col);
    Some(MapObject::new(entity_type, x, y))
}

/// Renders a document as pretty-printed JSON with two-space indentation.
pub fn to_json_string(doc: &ExportedDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
