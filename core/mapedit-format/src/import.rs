//! Document → grid.

use crate::document::RawDocument;
use crate::error::{FormatError, Result};
use mapedit_catalog::{Catalog, EMPTY_TERRAIN_CODE};
use mapedit_grid::{DEFAULT_TILE_SIZE, Grid};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Records dropped while rebuilding a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Tile cells whose code is not a string or names no terrain tool.
    pub dropped_tiles: usize,
    /// Objects that are malformed, out of bounds, or of an unknown type.
    pub dropped_objects: usize,
}

impl ImportReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped_tiles == 0 && self.dropped_objects == 0
    }
}

#[derive(Deserialize)]
struct ObjectRecord {
    #[serde(rename = "type")]
    object_type: String,
    x: f64,
    y: f64,
}

/// Parses JSON text into an unvalidated document.
pub fn parse_document(json: &str) -> Result<RawDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Parses and imports JSON text in one step.
pub fn import_str(json: &str, catalog: &Catalog) -> Result<Grid> {
    import(&parse_document(json)?, catalog)
}

/// Rebuilds a grid from a document.
pub fn import(doc: &RawDocument, catalog: &Catalog) -> Result<Grid> {
    import_with_report(doc, catalog).map(|(grid, _)| grid)
}

/// Rebuilds a grid from a document and reports what was dropped.
pub fn import_with_report(doc: &RawDocument, catalog: &Catalog) -> Result<(Grid, ImportReport)> {
    let tiles = doc.tiles.as_ref().ok_or(FormatError::MissingField("tiles"))?;
    let width = required_number("width", doc.width.as_ref())?;
    let height = required_number("height", doc.height.as_ref())?;

    let cols = tiles.first().map(Vec::len).ok_or(FormatError::EmptyTiles)?;
    if cols == 0 {
        return Err(FormatError::EmptyTiles);
    }
    if let Some((row, found)) = tiles
        .iter()
        .enumerate()
        .map(|(row, cells)| (row, cells.len()))
        .find(|&(_, len)| len != cols)
    {
        return Err(FormatError::Ragged {
            row,
            expected: cols,
            found,
        });
    }
    let rows = tiles.len();

    let tile_size = tile_size(doc.tile_size.as_ref())?;
    let mut grid = Grid::new(rows, cols, tile_size)?;

    if width != grid.pixel_width() as f64 || height != rows as f64 {
        warn!(
            "Header says {}x{} but tile matrix is {} cols x {} rows at {}px; using the matrix",
            width, height, cols, rows, tile_size
        );
    }

    let mut report = ImportReport::default();

    for (row, cells) in tiles.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            match value.as_str() {
                Some(EMPTY_TERRAIN_CODE) => {}
                Some(code) => match catalog.lookup_by_terrain_code(code) {
                    Some(tool) => {
                        grid.set_terrain(row, col, Some(tool.id.clone()));
                    }
                    None => {
                        debug!("Dropping unknown terrain code {:?} at ({}, {})", code, row, col);
                        report.dropped_tiles += 1;
                    }
                },
                None => {
                    debug!("Dropping non-string tile {} at ({}, {})", value, row, col);
                    report.dropped_tiles += 1;
                }
            }
        }
    }

    for value in doc.objects.iter().flatten() {
        if !place_object(&mut grid, catalog, value) {
            report.dropped_objects += 1;
        }
    }

    info!(
        "Imported {}x{} level ({} tiles and {} objects dropped)",
        cols, rows, report.dropped_tiles, report.dropped_objects
    );
    Ok((grid, report))
}

fn place_object(grid: &mut Grid, catalog: &Catalog, value: &Value) -> bool {
    let record: ObjectRecord = match serde_json::from_value(value.clone()) {
        Ok(record) => record,
        Err(e) => {
            debug!("Dropping malformed object {}: {}", value, e);
            return false;
        }
    };
    let Some((row, col)) = grid.cell_at_pixel(record.x, record.y) else {
        debug!(
            "Dropping {:?} at ({}, {}): outside the grid",
            record.object_type, record.x, record.y
        );
        return false;
    };
    let Some(tool) = catalog.lookup_by_entity_type(&record.object_type) else {
        debug!("Dropping unknown entity type {:?}", record.object_type);
        return false;
    };
    grid.set_entity(row, col, Some(tool.id.clone()))
}

/// A header number that must be present and non-zero.
fn required_number(field: &'static str, value: Option<&Value>) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Err(FormatError::MissingField(field)),
        Some(v) => match v.as_f64() {
            Some(n) if n == 0.0 => Err(FormatError::MissingField(field)),
            Some(n) => Ok(n),
            None => Err(FormatError::InvalidField {
                field,
                value: v.to_string(),
            }),
        },
    }
}

fn tile_size(value: Option<&Value>) -> Result<u32> {
    let Some(v) = value.filter(|v| !v.is_null()) else {
        warn!("Document has no tileSize, assuming {}", DEFAULT_TILE_SIZE);
        return Ok(DEFAULT_TILE_SIZE);
    };
    match v.as_u64() {
        Some(size) if size > 0 => {
            u32::try_from(size).map_err(|_| FormatError::InvalidTileSize(v.to_string()))
        }
        _ => match v.as_f64() {
            Some(size) if size > 0.0 && size.fract() == 0.0 && size <= f64::from(u32::MAX) => {
                Ok(size as u32)
            }
            _ => Err(FormatError::InvalidTileSize(v.to_string())),
        },
    }
}
