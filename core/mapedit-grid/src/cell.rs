use mapedit_catalog::ToolId;
use serde::{Deserialize, Serialize};

/// One addressable grid square.
///
/// Terrain and entity are independent: a cell may hold both (an entity
/// standing on a tile), either, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Option<ToolId>,
    pub entity: Option<ToolId>,
}

impl Cell {
    /// An empty cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            terrain: None,
            entity: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terrain.is_none() && self.entity.is_none()
    }

    /// True when both layers are occupied.
    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.terrain.is_some() && self.entity.is_some()
    }

    pub fn terrain_id(&self) -> Option<&str> {
        self.terrain.as_ref().map(ToolId::as_str)
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity.as_ref().map(ToolId::as_str)
    }
}
