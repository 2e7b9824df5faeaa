use glam::Vec2;

/// Squared pixel distance past which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 9.0;

/// Result of releasing a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ReleaseResult {
    /// The pointer moved too far while held; no click.
    Dragged,
    /// Press and release with little movement.
    Click,
    /// Release with no matching press.
    Unmatched,
}

/// Tracks cursor position and press/drag state for one button.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerState {
    pub(crate) position: Vec2,
    pressed_at: Option<Vec2>,
    dragging: bool,
}

impl PointerState {
    /// Move the cursor and return the delta from the previous position.
    pub(crate) fn move_to(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.position;
        self.position = position;
        if let Some(origin) = self.pressed_at {
            if position.distance_squared(origin) > DRAG_THRESHOLD_SQ {
                self.dragging = true;
            }
        }
        delta
    }

    /// Start a press at the current cursor position.
    pub(crate) fn press(&mut self) {
        self.pressed_at = Some(self.position);
        self.dragging = false;
    }

    pub(crate) fn release(&mut self) -> ReleaseResult {
        let was_dragging = std::mem::take(&mut self.dragging);
        match self.pressed_at.take() {
            None => ReleaseResult::Unmatched,
            Some(_) if was_dragging => ReleaseResult::Dragged,
            Some(_) => ReleaseResult::Click,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_wiggle_is_still_a_click() {
        let mut p = PointerState::default();
        let _ = p.move_to(Vec2::new(10.0, 10.0));
        p.press();
        let _ = p.move_to(Vec2::new(11.0, 12.0));
        assert_eq!(p.release(), ReleaseResult::Click);
        assert_eq!(p.position, Vec2::new(11.0, 12.0));
    }

    #[test]
    fn drag_suppresses_click_even_if_pointer_returns() {
        let mut p = PointerState::default();
        p.press();
        let _ = p.move_to(Vec2::new(40.0, 0.0));
        let _ = p.move_to(Vec2::ZERO);
        assert_eq!(p.release(), ReleaseResult::Dragged);
    }

    #[test]
    fn release_without_press() {
        let mut p = PointerState::default();
        assert_eq!(p.release(), ReleaseResult::Unmatched);
    }
}
