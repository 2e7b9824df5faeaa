//! Input handling: event types, drag tracking, and the input processor
//! that converts raw host events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Press/drag tracking and cursor position.
pub(crate) mod mouse;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
