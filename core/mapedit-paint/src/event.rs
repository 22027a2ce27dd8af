use serde::{Deserialize, Serialize};

/// Mouse/pointer button that started a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Left button, or touch/pen contact.
    #[default]
    Primary,
    /// Right button. Always erases.
    Secondary,
    /// Middle or any other button. Treated like `Primary`.
    Auxiliary,
}

/// Input forwarded by the presentation layer, already mapped to grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Button pressed over a cell.
    Down {
        row: usize,
        col: usize,
        button: PointerButton,
    },
    /// Pointer moved into a cell.
    Enter { row: usize, col: usize },
    /// Button released.
    Up,
    /// Pointer left the paintable surface.
    Leave,
}
