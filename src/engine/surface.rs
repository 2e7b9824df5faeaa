//! The drawable the engine renders into.

use crate::camera::Camera;
use crate::scene::SceneGraph;

/// A host-provided output surface.
///
/// The engine owns its surface and is the only caller: size changes go
/// through [`SceneEngine::resize`](super::SceneEngine::resize) so the
/// surface and the camera's aspect ratio never drift apart.
pub trait RenderSurface {
    /// Resize the backing drawable to `width x height` pixels.
    fn set_size(&mut self, width: u32, height: u32);

    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    /// Draw one frame of `scene` as seen by `camera`.
    fn render(&mut self, scene: &SceneGraph, camera: &Camera);

    /// Show a user-visible error message in place of the scene.
    fn show_error(&mut self, _message: &str) {}
}
