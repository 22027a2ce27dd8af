//! Editor configuration read from `mapedit.toml`.
//!
//! ```toml
//! [grid]
//! rows = 15
//! cols = 100
//! tile_size = 32
//!
//! [tools]
//! default = "ground"
//!
//! [export]
//! file_name = "level_map.json"
//! terrain_under_entity = "keep"   # or "suppress"
//! ```
//!
//! Every key is optional.

use crate::error::SessionResult;
use mapedit_format::{ExportOptions, TerrainUnderEntity};
use mapedit_grid::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// File name looked up when no config path is given.
pub const CONFIG_FILE_NAME: &str = "mapedit.toml";

/// Size of the grid a new session starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            tile_size: default_tile_size(),
        }
    }
}

/// Palette settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Tool selected when a session starts.
    #[serde(default = "default_tool", rename = "default")]
    pub default_tool: String,
}

fn default_tool() -> String {
    "ground".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default)]
    pub terrain_under_entity: TerrainUnderEntity,
}

fn default_file_name() -> String {
    "level_map.json".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            terrain_under_entity: TerrainUnderEntity::default(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            terrain_under_entity: self.terrain_under_entity,
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl EditorConfig {
    /// Parses a config from TOML text.
    pub fn from_toml_str(contents: &str) -> SessionResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `mapedit.toml` from the working directory, if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Loads a config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded editor config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
