//! Viewport resize handling.

use super::{RenderSurface, SceneEngine};

impl<S: RenderSurface> SceneEngine<S> {
    /// Apply a new viewport size to the camera and the surface together.
    ///
    /// The aspect ratio and projection matrix are updated before the
    /// surface is resized, so the next rendered frame sees both. A zero
    /// width or height is skipped entirely and the last valid size stays
    /// in effect; returns whether the resize was applied.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.alive {
            return false;
        }
        if width == 0 || height == 0 {
            log::debug!("skipping degenerate resize to {width}x{height}");
            return false;
        }
        self.camera.set_aspect(width as f32 / height as f32);
        self.surface.set_size(width, height);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::test_support::RecordingSurface;
    use crate::engine::SceneEngine;
    use crate::options::Options;

    fn engine() -> SceneEngine<RecordingSurface> {
        SceneEngine::new(Options::default(), RecordingSurface::sized(1024, 768))
            .unwrap()
    }

    #[test]
    fn resize_updates_aspect_projection_and_surface() {
        let mut e = engine();
        let before = e.camera().projection_matrix();
        assert!(e.resize(800, 600));
        assert!((e.camera().aspect() - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(e.surface().size, (800, 600));

        let _ = e.resize(1600, 600);
        let after = e.camera().projection_matrix();
        assert_ne!(before, after);
        // x scale = y scale / aspect
        assert!((after.x_axis.x - after.y_axis.y / (1600.0 / 600.0)).abs() < 1e-5);
    }

    #[test]
    fn zero_height_is_skipped() {
        let mut e = engine();
        let projection = e.camera().projection_matrix();
        assert!(!e.resize(800, 0));
        assert!(!e.resize(0, 600));
        assert_eq!(e.camera().projection_matrix(), projection);
        assert!(e.camera().aspect().is_finite());
        assert_eq!(e.surface().size, (1024, 768));
        assert!(e.surface().resizes.is_empty());

        // Retry with a usable size later.
        assert!(e.resize(800, 600));
        assert_eq!(e.surface().size, (800, 600));
    }

    #[test]
    fn resize_after_teardown_is_ignored() {
        let mut e = engine();
        e.teardown();
        assert!(!e.resize(800, 600));
        assert_eq!(e.surface().size, (1024, 768));
    }
}
