//! Paint controller for MapEdit.
//!
//! Turns a stream of pointer events into discrete grid commands. The
//! controller is a pure state machine with no UI or I/O dependencies:
//!
//! ```text
//! Idle      down(secondary)   -> Erasing    emits Erase
//! Idle      down(other)       -> Painting   emits Paint (Erase for the eraser tool)
//! Erasing   enter(r, c)       -> Erasing    emits Erase
//! Painting  enter(r, c)       -> Painting   emits Paint (Erase for the eraser tool)
//! Idle      enter(r, c)       -> Idle       ignored
//! any       up | leave        -> Idle
//! ```
//!
//! A pointer-down always starts a new gesture, even mid-gesture.
//!
//! The gesture mode is fixed at pointer-down and independent of the active
//! tool: a right-drag always erases, a left-drag with the eraser erases, a
//! left-drag with any other tool paints it.

mod command;
mod event;
mod gesture;

pub use command::Command;
pub use event::{PointerButton, PointerEvent};
pub use gesture::{GestureState, PaintController, transition};
