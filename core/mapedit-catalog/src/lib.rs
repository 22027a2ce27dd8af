//! Tool catalog for the MapEdit level editor.
//!
//! The catalog is the closed set of things a user can paint onto a level:
//! - [`Tool`]: a palette entry with a stable id and a [`ToolKind`]
//! - [`ToolKind`]: terrain (serialized as a tile code), entity (serialized
//!   as an object type), or the eraser sentinel
//! - [`Catalog`]: id / terrain-code / entity-type lookups that return
//!   `None` for unknown references
//!
//! The catalog is built once at startup and never mutated afterwards.

mod catalog;
mod tool;

pub use catalog::Catalog;
pub use tool::{ERASER_ID, EMPTY_TERRAIN_CODE, Tool, ToolCategory, ToolId, ToolKind};

/// Errors raised while assembling a custom catalog.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate tool id: {0}")]
    DuplicateId(String),

    #[error("duplicate terrain code {code:?} (tools {first} and {second})")]
    DuplicateTerrainCode {
        code: String,
        first: String,
        second: String,
    },

    #[error("duplicate entity type {entity_type:?} (tools {first} and {second})")]
    DuplicateEntityType {
        entity_type: String,
        first: String,
        second: String,
    },

    #[error("tool {0} uses the reserved empty terrain code \"0\"")]
    ReservedTerrainCode(String),

    #[error("tool id \"eraser\" is reserved for the eraser")]
    ReservedEraserId,

    #[error("eraser tool must use the id \"eraser\" (got {0})")]
    MisnamedEraser(String),

    #[error("tool id must not be empty")]
    EmptyId,
}
