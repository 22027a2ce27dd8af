//! Tool definitions and identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Id of the eraser tool. The eraser is never stored in a cell.
pub const ERASER_ID: &str = "eraser";

/// Tile code written for a cell without terrain.
pub const EMPTY_TERRAIN_CODE: &str = "0";

/// Identifier of a catalog tool (e.g. `"ground"`, `"goomba"`).
///
/// Cells store tool ids rather than tools, so an id may outlive or predate
/// the catalog it is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Creates a tool id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The eraser sentinel id.
    #[must_use]
    pub fn eraser() -> Self {
        Self(ERASER_ID.to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this id names the eraser.
    #[must_use]
    pub fn is_eraser(&self) -> bool {
        self.0 == ERASER_ID
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToolId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ToolId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ToolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ToolId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Which grid layer a tool paints into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Static tiles in the dense `tiles` matrix.
    Terrain,
    /// Dynamic elements in the sparse `objects` list.
    Entity,
}

/// What a tool does and what it serializes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ToolKind {
    /// Written into `tiles[row][col]` as `code`.
    Terrain { code: String },
    /// Written into `objects` as `{ "type": entity_type, ... }`.
    Entity { entity_type: String },
    /// Clears both layers of a cell. Carries no payload.
    Eraser,
}

/// A palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub kind: ToolKind,
}

impl Tool {
    /// Shorthand for a terrain tool.
    pub fn terrain(id: &str, name: &str, code: &str) -> Self {
        Self {
            id: ToolId::from(id),
            name: name.to_string(),
            description: String::new(),
            kind: ToolKind::Terrain {
                code: code.to_string(),
            },
        }
    }

    /// Shorthand for an entity tool.
    pub fn entity(id: &str, name: &str, entity_type: &str) -> Self {
        Self {
            id: ToolId::from(id),
            name: name.to_string(),
            description: String::new(),
            kind: ToolKind::Entity {
                entity_type: entity_type.to_string(),
            },
        }
    }

    /// The eraser sentinel.
    pub fn eraser() -> Self {
        Self {
            id: ToolId::eraser(),
            name: "Eraser".to_string(),
            description: "Remove items".to_string(),
            kind: ToolKind::Eraser,
        }
    }

    /// Sets the palette description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// The layer this tool paints into, or `None` for the eraser.
    #[must_use]
    pub fn category(&self) -> Option<ToolCategory> {
        match self.kind {
            ToolKind::Terrain { .. } => Some(ToolCategory::Terrain),
            ToolKind::Entity { .. } => Some(ToolCategory::Entity),
            ToolKind::Eraser => None,
        }
    }

    /// Tile code for terrain tools.
    #[must_use]
    pub fn terrain_code(&self) -> Option<&str> {
        match &self.kind {
            ToolKind::Terrain { code } => Some(code),
            _ => None,
        }
    }

    /// Object type for entity tools.
    #[must_use]
    pub fn entity_type(&self) -> Option<&str> {
        match &self.kind {
            ToolKind::Entity { entity_type } => Some(entity_type),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_eraser(&self) -> bool {
        matches!(self.kind, ToolKind::Eraser)
    }
}
