//! The closed tool registry.

use crate::tool::{EMPTY_TERRAIN_CODE, ERASER_ID, Tool, ToolCategory, ToolKind};
use crate::CatalogError;
use std::collections::HashMap;

/// Registry of every paintable tool, in palette order.
///
/// Lookups are total: an unknown id, code or type yields `None`.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
    by_id: HashMap<String, usize>,
    by_terrain_code: HashMap<String, usize>,
    by_entity_type: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a list of tools.
    ///
    /// The eraser is prepended when the list does not contain it. An eraser
    /// in the list must use the `eraser` id and appear only once.
    pub fn new(tools: Vec<Tool>) -> Result<Self, CatalogError> {
        let mut ordered = Vec::with_capacity(tools.len() + 1);
        if !tools.iter().any(Tool::is_eraser) {
            ordered.push(Tool::eraser());
        }
        ordered.extend(tools);

        let mut by_id = HashMap::new();
        let mut by_terrain_code: HashMap<String, usize> = HashMap::new();
        let mut by_entity_type: HashMap<String, usize> = HashMap::new();

        for (index, tool) in ordered.iter().enumerate() {
            let id = tool.id.as_str();
            if id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if id == ERASER_ID && !tool.is_eraser() {
                return Err(CatalogError::ReservedEraserId);
            }
            if tool.is_eraser() && id != ERASER_ID {
                return Err(CatalogError::MisnamedEraser(id.to_string()));
            }
            if by_id.insert(id.to_string(), index).is_some() {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }

            match &tool.kind {
                ToolKind::Terrain { code } => {
                    if code == EMPTY_TERRAIN_CODE {
                        return Err(CatalogError::ReservedTerrainCode(id.to_string()));
                    }
                    if let Some(&first) = by_terrain_code.get(code) {
                        return Err(CatalogError::DuplicateTerrainCode {
                            code: code.clone(),
                            first: ordered[first].id.to_string(),
                            second: id.to_string(),
                        });
                    }
                    by_terrain_code.insert(code.clone(), index);
                }
                ToolKind::Entity { entity_type } => {
                    if let Some(&first) = by_entity_type.get(entity_type) {
                        return Err(CatalogError::DuplicateEntityType {
                            entity_type: entity_type.clone(),
                            first: ordered[first].id.to_string(),
                            second: id.to_string(),
                        });
                    }
                    by_entity_type.insert(entity_type.clone(), index);
                }
                ToolKind::Eraser => {}
            }
        }

        Ok(Self {
            tools: ordered,
            by_id,
            by_terrain_code,
            by_entity_type,
        })
    }

    /// The game's built-in palette.
    #[must_use]
    pub fn builtin() -> Self {
        let tools = vec![
            Tool::eraser(),
            Tool::terrain("ground", "Ground", "1").with_description("Solid ground"),
            Tool::terrain("brick", "Brick", "2").with_description("Destructible brick"),
            Tool::terrain("hard_block", "Hard Block", "3").with_description("Indestructible block"),
            Tool::terrain("death_block", "Invisible Death", "4")
                .with_description("Invisible deadly tile"),
            Tool::entity("coin", "Coin", "coin").with_description("Collect for points"),
            Tool::entity("mushroom", "Magic Mushroom", "mushroom").with_description("Power up"),
            Tool::entity("goomba", "Goomba", "goomba").with_description("Basic enemy"),
            Tool::entity("koopa", "Koopa", "koopa").with_description("Shell enemy"),
        ];
        match Self::new(tools) {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("built-in catalog is inconsistent: {e}"),
        }
    }

    /// Looks up a tool by id.
    #[must_use]
    pub fn lookup_by_id(&self, id: &str) -> Option<&Tool> {
        self.by_id.get(id).map(|&i| &self.tools[i])
    }

    /// Looks up the terrain tool serialized as `code`.
    #[must_use]
    pub fn lookup_by_terrain_code(&self, code: &str) -> Option<&Tool> {
        self.by_terrain_code.get(code).map(|&i| &self.tools[i])
    }

    /// Looks up the entity tool serialized as `entity_type`.
    #[must_use]
    pub fn lookup_by_entity_type(&self, entity_type: &str) -> Option<&Tool> {
        self.by_entity_type.get(entity_type).map(|&i| &self.tools[i])
    }

    /// Resolves `id` only if it names a tool of `category`.
    #[must_use]
    pub fn resolve(&self, id: &str, category: ToolCategory) -> Option<&Tool> {
        self.lookup_by_id(id)
            .filter(|tool| tool.category() == Some(category))
    }

    /// All tools in palette order, eraser included.
    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Terrain tools in palette order.
    pub fn terrain_tools(&self) -> impl Iterator<Item = &Tool> {
        self.iter()
            .filter(|tool| tool.category() == Some(ToolCategory::Terrain))
    }

    /// Entity tools in palette order.
    pub fn entity_tools(&self) -> impl Iterator<Item = &Tool> {
        self.iter()
            .filter(|tool| tool.category() == Some(ToolCategory::Entity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
