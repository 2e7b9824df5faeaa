//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection, the held button, modifier keys). It is the only thing
//! that sits between raw host events and the engine's
//! [`execute`](crate::SceneEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::mouse::{PointerState, ReleaseResult};
use crate::engine::SceneCommand;

/// Converts raw host events into [`SceneCommand`]s.
///
/// Left drag orbits, shift+left drag or right/middle drag pans and the
/// wheel zooms. Host click events become [`SceneCommand::Click`] unless
/// they conclude a drag.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input.handle_event(event) {
///     if let Some(action) = engine.execute(cmd) {
///         open(action);
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Cursor position and press/drag state.
    pointer: PointerState,
    /// Button currently held, if any.
    held: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// The last release ended a drag; swallow the click that follows.
    suppress_click: bool,
}

impl InputProcessor {
    /// Create a processor with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position in canvas pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.pointer.position
    }

    /// Button currently held, if any.
    #[must_use]
    pub fn held_button(&self) -> Option<MouseButton> {
        self.held
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Forget any held button.
    fn release_mouse_state(&mut self) {
        self.held = None;
        let _ = self.pointer.release();
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => Some(SceneCommand::Zoom { delta }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::Click { x, y } => {
                if std::mem::take(&mut self.suppress_click) {
                    return None;
                }
                Some(SceneCommand::Click { x, y })
            }
            InputEvent::PointerLeft => {
                self.release_mouse_state();
                None
            }
            InputEvent::Resized { width, height } => {
                Some(SceneCommand::Resize { width, height })
            }
        }
    }

    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<SceneCommand> {
        let delta = self.pointer.move_to(Vec2::new(x, y));
        let button = self.held?;
        if delta == Vec2::ZERO {
            return None;
        }
        let pan = button != MouseButton::Left || self.shift_pressed;
        if pan {
            Some(SceneCommand::PanCamera { delta })
        } else {
            Some(SceneCommand::RotateCamera { delta })
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<SceneCommand> {
        if pressed {
            if self.held.is_none() {
                self.held = Some(button);
                self.suppress_click = false;
                self.pointer.press();
            }
        } else if self.held == Some(button) {
            self.held = None;
            self.suppress_click =
                matches!(self.pointer.release(), ReleaseResult::Dragged);
        }
        None
    }
}
