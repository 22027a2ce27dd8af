//! Document shapes on both sides of the format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A level as written for the game runtime.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedDocument {
    /// Level width in pixels (`cols * tile_size`).
    pub width: u64,
    /// Level height in rows.
    pub height: u64,
    pub tile_size: u32,
    /// Row-major terrain codes, `"0"` for empty.
    pub tiles: Vec<Vec<String>>,
    /// One entry per cell holding an entity, in row-major scan order.
    pub objects: Vec<MapObject>,
}

/// An entity placed at the pixel-space top-left corner of its cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapObject {
    #[serde(rename = "type")]
    pub object_type: String,
    pub x: u64,
    pub y: u64,
    /// Accepted for compatibility with hand-edited levels; never exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl MapObject {
    pub fn new(object_type: impl Into<String>, x: u64, y: u64) -> Self {
        Self {
            object_type: object_type.into(),
            x,
            y,
            variant: None,
        }
    }
}

/// A level document as read from outside, before validation.
///
/// Every field is optional and loosely typed so that validation, not
/// deserialization, decides what is fatal and what is dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
    #[serde(default)]
    pub tile_size: Option<Value>,
    #[serde(default)]
    pub tiles: Option<Vec<Vec<Value>>>,
    #[serde(default)]
    pub objects: Option<Vec<Value>>,
}

impl From<&ExportedDocument> for RawDocument {
    fn from(doc: &ExportedDocument) -> Self {
        Self {
            width: Some(Value::from(doc.width)),
            height: Some(Value::from(doc.height)),
            tile_size: Some(Value::from(doc.tile_size)),
            tiles: Some(
                doc.tiles
                    .iter()
                    .map(|row| row.iter().map(|code| Value::from(code.as_str())).collect())
                    .collect(),
            ),
            objects: Some(
                doc.objects
                    .iter()
                    .map(|object| {
                        serde_json::json!({
                            "type": object.object_type,
                            "x": object.x,
                            "y": object.y,
                        })
                    })
                    .collect(),
            ),
        }
    }
}

impl From<ExportedDocument> for RawDocument {
    fn from(doc: ExportedDocument) -> Self {
        Self::from(&doc)
    }
}
