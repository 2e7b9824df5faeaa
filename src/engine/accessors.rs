//! Read-only queries for [`SceneEngine`].

use super::{LoadState, RenderSurface, SceneEngine};
use crate::camera::{Camera, OrbitController};
use crate::options::Options;
use crate::scene::{NodeId, SceneGraph};

// ── Camera ──

impl<S: RenderSurface> SceneEngine<S> {
    /// The shared camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The orbit controller.
    #[must_use]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    /// Whether the intro fly-in is still running.
    #[must_use]
    pub fn intro_active(&self) -> bool {
        self.intro.is_some()
    }
}

// ── Scene access ──

impl<S: RenderSurface> SceneEngine<S> {
    /// The scene graph.
    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// The clickable cube node.
    #[must_use]
    pub fn cube(&self) -> NodeId {
        self.cube
    }

    /// Root of the loaded asset, if loading succeeded.
    #[must_use]
    pub fn model(&self) -> Option<NodeId> {
        self.model
    }

    /// Asset load progress.
    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

// ── Surface & timing ──

impl<S: RenderSurface> SceneEngine<S> {
    /// The output surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the output surface for host-specific state.
    /// Resize through [`resize`](Self::resize) instead of resizing the
    /// surface directly.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Smoothed frames per second over rendered frames.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frame_timing.frames()
    }
}
