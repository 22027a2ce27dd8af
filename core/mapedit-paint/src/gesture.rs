//! Gesture state machine.

use crate::command::Command;
use crate::event::{PointerButton, PointerEvent};
use mapedit_catalog::ToolId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the controller is within a pointer gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    #[default]
    Idle,
    /// Left-drag: applies the active tool.
    Painting,
    /// Right-drag: clears cells regardless of the active tool.
    Erasing,
}

impl GestureState {
    #[must_use]
    pub fn is_drawing(self) -> bool {
        !matches!(self, GestureState::Idle)
    }
}

/// Computes the next state and the command (if any) for one event.
///
/// `active_tool` is the tool selected in the palette at the time of the
/// event; it only matters in the `Painting` state.
#[must_use]
pub fn transition(
    state: GestureState,
    event: &PointerEvent,
    active_tool: &ToolId,
) -> (GestureState, Option<Command>) {
    match *event {
        PointerEvent::Down { row, col, button } => {
            let next = match button {
                PointerButton::Secondary => GestureState::Erasing,
                PointerButton::Primary | PointerButton::Auxiliary => GestureState::Painting,
            };
            (next, action(next, row, col, active_tool))
        }
        PointerEvent::Enter { row, col } => (state, action(state, row, col, active_tool)),
        PointerEvent::Up | PointerEvent::Leave => (GestureState::Idle, None),
    }
}

fn action(state: GestureState, row: usize, col: usize, active_tool: &ToolId) -> Option<Command> {
    match state {
        GestureState::Idle => None,
        GestureState::Erasing => Some(Command::Erase { row, col }),
        GestureState::Painting if active_tool.is_eraser() => Some(Command::Erase { row, col }),
        GestureState::Painting => Some(Command::Paint {
            row,
            col,
            tool: active_tool.clone(),
        }),
    }
}

/// Holds gesture state between events.
#[derive(Debug, Clone, Default)]
pub struct PaintController {
    state: GestureState,
}

impl PaintController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Feeds one event, returning the command to apply.
    pub fn handle(&mut self, event: &PointerEvent, active_tool: &ToolId) -> Option<Command> {
        let (next, command) = transition(self.state, event, active_tool);
        if next != self.state {
            debug!("gesture {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        command
    }

    /// Ends any gesture without emitting a command.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}
