//! Level JSON format for MapEdit.
//!
//! The game runtime reads levels as:
//!
//! ```json
//! {
//!   "width": 3200,
//!   "height": 15,
//!   "tileSize": 32,
//!   "tiles": [["0", "1", ...], ...],
//!   "objects": [{ "type": "goomba", "x": 64, "y": 416 }]
//! }
//! ```
//!
//! Terrain is a dense row-major matrix of tile codes (`"0"` = empty) while
//! entities are a sparse list positioned in pixels. [`export`] and [`import`]
//! translate between that shape and a [`mapedit_grid::Grid`].
//!
//! Import is tolerant: unknown codes, unknown entity types, malformed or
//! out-of-bounds object records are dropped one by one. Only a document
//! missing its required header fields or carrying a non-rectangular matrix
//! is rejected.

mod document;
mod error;
mod export;
mod import;

pub use document::{ExportedDocument, MapObject, RawDocument};
pub use error::{FormatError, Result};
pub use export::{ExportOptions, TerrainUnderEntity, export, to_json_string};
pub use import::{ImportReport, import, import_str, import_with_report, parse_document};
