//! The engine's interactive vocabulary.
//!
//! Every user-facing operation, whether it came from a mouse gesture, a
//! host event or a programmatic call, is a `SceneCommand`. Consumers pass
//! commands to [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

use super::{LoadState, RenderSurface, SceneEngine};
use crate::picking::resolve_pointer;
use crate::scene::InteractiveAction;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// let _ = engine.execute(SceneCommand::Zoom { delta: 1.0 });
/// if let Some(action) = engine.execute(SceneCommand::Click { x, y }) {
///     navigate(&action);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera by `delta` pixels of mouse movement.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// Click at a viewport position; may trigger an interactive action.
    Click {
        /// Horizontal position in viewport pixels.
        x: f32,
        /// Vertical position in viewport pixels (origin top-left).
        y: f32,
    },

    /// The viewport changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

impl<S: RenderSurface> SceneEngine<S> {
    /// Execute a command.
    ///
    /// Returns the action to perform when a click lands on an interactive
    /// object as the nearest hit. The engine does not perform the action
    /// itself; navigation belongs to the host. Commands are ignored after
    /// teardown, and clicks are ignored until the scene has loaded.
    pub fn execute(&mut self, command: SceneCommand) -> Option<InteractiveAction> {
        if !self.alive {
            return None;
        }
        match command {
            SceneCommand::RotateCamera { delta } => self.orbit.rotate(delta),
            SceneCommand::PanCamera { delta } => self.orbit.pan(delta),
            SceneCommand::Zoom { delta } => self.orbit.zoom(delta),
            SceneCommand::Click { x, y } => return self.click(x, y),
            SceneCommand::Resize { width, height } => {
                let _ = self.resize(width, height);
            }
        }
        None
    }

    /// Resolve a click against the current camera and scene.
    fn click(&self, x: f32, y: f32) -> Option<InteractiveAction> {
        if self.load_state != LoadState::Ready {
            return None;
        }
        let (width, height) = self.surface.size();
        resolve_pointer(
            &self.camera,
            &self.scene,
            x,
            y,
            width as f32,
            height as f32,
        )
        .cloned()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::engine::test_support::RecordingSurface;
    use crate::options::Options;
    use crate::scene::{Mesh, SceneAsset, SceneNode, Transform};

    const W: u32 = 800;
    const H: u32 = 600;

    fn loaded_engine(options: Options) -> SceneEngine<RecordingSurface> {
        let mut e =
            SceneEngine::new(options, RecordingSurface::sized(W, H)).unwrap();
        e.on_asset_loaded(Ok(SceneAsset::default()));
        e
    }

    fn no_intro() -> Options {
        let mut options = Options::default();
        options.intro.enabled = false;
        options
    }

    /// Pixel position of a world point on the 800x600 surface.
    fn pixel_of(e: &SceneEngine<RecordingSurface>, world: Vec3) -> Vec2 {
        let ndc = e.camera().project(world).unwrap();
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * W as f32,
            (1.0 - ndc.y) * 0.5 * H as f32,
        )
    }

    fn click_at(
        e: &mut SceneEngine<RecordingSurface>,
        p: Vec2,
    ) -> Option<InteractiveAction> {
        e.execute(SceneCommand::Click { x: p.x, y: p.y })
    }

    #[test]
    fn click_on_cube_opens_link_once_per_click() {
        let mut e = loaded_engine(no_intro());
        let p = pixel_of(&e, Vec3::new(1.5, 0.5, 0.0));
        let expected =
            Some(InteractiveAction::OpenUrl("https://example.com/".into()));
        assert_eq!(click_at(&mut e, p), expected);
        assert_eq!(click_at(&mut e, p), expected);
    }

    #[test]
    fn click_on_empty_space_is_a_no_op() {
        let mut e = loaded_engine(no_intro());
        assert_eq!(click_at(&mut e, Vec2::new(5.0, 5.0)), None);
        // Centre of the viewport looks at the origin, beside the cube.
        assert_eq!(
            click_at(&mut e, Vec2::new(W as f32 / 2.0, H as f32 / 2.0)),
            None
        );
    }

    #[test]
    fn occluded_cube_is_not_clickable() {
        let mut options = no_intro();
        options.scene.cube_position = [0.0, 0.0, 0.0];
        let mut e = loaded_engine(options);
        let p = pixel_of(&e, Vec3::ZERO);
        assert!(click_at(&mut e, p).is_some());

        // A plain wall between the camera and the cube takes the hit.
        let wall = SceneNode::with_mesh("wall", Mesh::plane(4.0, 4.0))
            .transformed(Transform::from_translation(Vec3::new(0.3, 1.5, 2.5)));
        let _ = e.scene.add(None, wall);
        assert_eq!(click_at(&mut e, p), None);
    }

    #[test]
    fn clicks_wait_for_the_scene() {
        let mut e =
            SceneEngine::new(no_intro(), RecordingSurface::sized(W, H)).unwrap();
        let p = pixel_of(&e, Vec3::new(1.5, 0.5, 0.0));
        assert_eq!(click_at(&mut e, p), None);
        e.on_asset_loaded(Ok(SceneAsset::default()));
        assert!(click_at(&mut e, p).is_some());
    }

    #[test]
    fn commands_are_ignored_after_teardown() {
        let mut e = loaded_engine(no_intro());
        let p = pixel_of(&e, Vec3::new(1.5, 0.5, 0.0));
        e.teardown();
        assert_eq!(click_at(&mut e, p), None);
        let _ = e.execute(SceneCommand::Zoom { delta: 5.0 });
        assert!(!e.orbit().is_moving());
    }

    #[test]
    fn resize_command_goes_through_viewport() {
        let mut e = loaded_engine(no_intro());
        assert_eq!(
            e.execute(SceneCommand::Resize {
                width: 1200,
                height: 600
            }),
            None
        );
        assert!((e.camera().aspect() - 2.0).abs() < 1e-6);
        assert_eq!(e.surface().size, (1200, 600));
    }

    #[test]
    fn camera_input_queues_orbit_motion() {
        let mut e = loaded_engine(no_intro());
        let _ = e.execute(SceneCommand::PanCamera {
            delta: Vec2::new(10.0, 0.0),
        });
        assert!(e.orbit().is_moving());
    }
}
