//! The render loop coordinator.
//!
//! [`SceneEngine`] owns the camera, the orbit controller, the intro
//! transition, the scene graph and the output surface. A host frame clock
//! calls [`SceneEngine::tick`] once per display refresh; discrete host
//! events arrive as [`SceneCommand`]s through [`SceneEngine::execute`].
//! Everything runs on one thread, so a resize or click handled between two
//! frames is fully applied before the next tick reads the camera.

mod accessors;
mod command;
mod scene_management;
mod surface;
#[cfg(test)]
pub(crate) mod test_support;
mod viewport;

pub use command::SceneCommand;
pub use surface::RenderSurface;
use web_time::Instant;

use crate::animation::{TransitionState, TransitionTick};
use crate::camera::{Camera, OrbitController};
use crate::error::VitrineError;
use crate::options::Options;
use crate::scene::{NodeId, SceneGraph};
use crate::util::frame_timing::FrameTiming;

/// Progress of the one-shot scene asset load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for the asset; no frames are rendered.
    #[default]
    Pending,
    /// Asset instantiated; the render loop is running.
    Ready,
    /// The load failed with this message; the scene is never rendered.
    Failed(String),
}

/// Whether the host should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Request the next frame.
    Continue,
    /// Stop scheduling: the engine was torn down or has nothing left to
    /// do.
    Stopped,
}

/// Interactive scene: camera, orbit control, intro fly-in, picking and
/// the frame loop around a host [`RenderSurface`].
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) from the host's frame callback and schedule
/// the next frame while it returns [`FrameStatus::Continue`]. Until the
/// scene asset completes via [`on_asset_loaded`](Self::on_asset_loaded),
/// ticks only advance the intro transition.
///
/// # Teardown
///
/// [`teardown`](Self::teardown) clears the liveness flag; every later
/// tick returns [`FrameStatus::Stopped`] without touching the camera or
/// the surface, and commands are ignored.
pub struct SceneEngine<S: RenderSurface> {
    /// Options the engine was built from.
    options: Options,
    /// Perspective camera shared by rendering and picking.
    camera: Camera,
    /// Orbit input integration and constraint clamping.
    orbit: OrbitController,
    /// Intro fly-in, `None` once finished or when disabled.
    intro: Option<TransitionState>,
    /// Scene content.
    scene: SceneGraph,
    /// The clickable cube.
    cube: NodeId,
    /// Root of the instantiated asset, once loaded.
    model: Option<NodeId>,
    /// Output drawable.
    surface: S,
    /// Asset load progress.
    load_state: LoadState,
    /// Cleared on teardown.
    alive: bool,
    /// Per-frame timing and FPS tracking.
    frame_timing: FrameTiming,
}

// =============================================================================
// Core
// =============================================================================

impl<S: RenderSurface> SceneEngine<S> {
    /// Build the scene and camera for `surface`.
    ///
    /// The camera starts at the intro start point (or its end point when
    /// the intro is disabled) with the surface's current aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::InvalidConstraints`] if the orbit options
    /// do not describe a valid constraint set.
    pub fn new(options: Options, surface: S) -> Result<Self, VitrineError> {
        let constraints = options.orbit.constraints()?;
        let orbit = OrbitController::new(constraints).with_speeds(
            options.orbit.rotate_speed,
            options.orbit.pan_speed,
            options.orbit.zoom_speed,
        );

        let (width, height) = surface.size();
        let aspect = if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        let camera = Camera::new(
            options.intro.initial_eye(),
            options.camera.target(),
            options.camera.fovy,
            aspect,
            options.camera.znear,
            options.camera.zfar,
        );

        let mut scene = SceneGraph::new();
        let cube = scene.add_labeled_cube(
            &options.scene.cube_label,
            options.scene.cube_size,
            options.scene.cube_position(),
            options.scene.cube_action(),
        );

        log::info!(
            "scene engine created ({width}x{height}, intro {})",
            if options.intro.enabled { "on" } else { "off" }
        );

        Ok(Self {
            intro: options.intro.transition(),
            options,
            camera,
            orbit,
            scene,
            cube,
            model: None,
            surface,
            load_state: LoadState::Pending,
            alive: true,
            frame_timing: FrameTiming::new(),
        })
    }

    /// Run one frame.
    ///
    /// In order: advance the intro transition, then (once the asset is
    /// loaded) integrate orbit damping and render through the camera.
    /// The caller schedules the next frame if this returns
    /// [`FrameStatus::Continue`].
    pub fn tick(&mut self, now: Instant) -> FrameStatus {
        if !self.alive {
            return FrameStatus::Stopped;
        }

        if let Some(state) = self.intro.take() {
            match state.tick(now) {
                TransitionTick::Running { position, state } => {
                    self.camera.eye = position;
                    self.intro = Some(state);
                }
                TransitionTick::Finished { position } => {
                    self.camera.eye = position;
                }
            }
        }

        match self.load_state {
            LoadState::Ready => {
                let _ = self.orbit.update(&mut self.camera);
                self.surface.render(&self.scene, &self.camera);
                self.frame_timing.end_frame(now);
                FrameStatus::Continue
            }
            LoadState::Pending => FrameStatus::Continue,
            LoadState::Failed(_) if self.intro.is_some() => {
                FrameStatus::Continue
            }
            LoadState::Failed(_) => FrameStatus::Stopped,
        }
    }

    /// Stop the engine. Idempotent.
    pub fn teardown(&mut self) {
        if self.alive {
            self.alive = false;
            self.orbit.stop();
            log::info!(
                "scene engine torn down after {} frames",
                self.frame_timing.frames()
            );
        }
    }

    /// Whether [`teardown`](Self::teardown) has not been called yet.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec3;

    use super::test_support::{floor_asset, RecordingSurface};
    use super::*;

    fn engine(options: Options) -> SceneEngine<RecordingSurface> {
        SceneEngine::new(options, RecordingSurface::sized(800, 600)).unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn camera_starts_at_intro_start_with_surface_aspect() {
        let e = engine(Options::default());
        assert_eq!(e.camera().eye, Vec3::new(0.0, 8.0, 6.0));
        assert!((e.camera().aspect() - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(e.load_state(), &LoadState::Pending);
    }

    #[test]
    fn invalid_orbit_options_fail_construction() {
        let mut options = Options::default();
        options.orbit.min_polar_deg = 120.0;
        let result =
            SceneEngine::new(options, RecordingSurface::sized(800, 600));
        assert!(matches!(result, Err(VitrineError::InvalidConstraints(_))));
    }

    #[test]
    fn no_frames_render_before_load() {
        let mut e = engine(Options::default());
        let t0 = Instant::now();
        for i in 0..5 {
            assert_eq!(e.tick(t0 + ms(i * 16)), FrameStatus::Continue);
        }
        assert!(e.surface().frames.is_empty());
        assert_eq!(e.frames_rendered(), 0);
        // The intro still advanced.
        assert!(e.camera().eye.y < 8.0);
    }

    #[test]
    fn load_completion_starts_rendering() {
        let mut e = engine(Options::default());
        let t0 = Instant::now();
        let _ = e.tick(t0);
        e.on_asset_loaded(Ok(floor_asset()));
        assert_eq!(e.load_state(), &LoadState::Ready);
        assert!(e.model().is_some());

        let _ = e.tick(t0 + ms(16));
        let _ = e.tick(t0 + ms(32));
        assert_eq!(e.surface().frames.len(), 2);
        assert_eq!(e.frames_rendered(), 2);
        // Cube, asset group and floor.
        assert_eq!(e.surface().node_counts[0], 3);
    }

    #[test]
    fn intro_lands_exactly_on_end() {
        let mut e = engine(Options::default());
        e.on_asset_loaded(Ok(floor_asset()));
        let t0 = Instant::now();
        let _ = e.tick(t0);
        let _ = e.tick(t0 + ms(1000));
        assert!(e.intro_active());
        let _ = e.tick(t0 + ms(2500));
        assert!(!e.intro_active());
        assert_eq!(e.camera().eye, Vec3::new(0.0, 3.0, 5.0));

        // Idle orbit updates leave the landing point untouched.
        let _ = e.tick(t0 + ms(2516));
        assert_eq!(e.camera().eye, Vec3::new(0.0, 3.0, 5.0));
        assert_eq!(
            e.surface().frames.last().map(|f| f.0),
            Some(Vec3::new(0.0, 3.0, 5.0))
        );
    }

    #[test]
    fn intro_disabled_starts_at_end() {
        let mut options = Options::default();
        options.intro.enabled = false;
        let e = engine(options);
        assert_eq!(e.camera().eye, Vec3::new(0.0, 3.0, 5.0));
        assert!(!e.intro_active());
    }

    #[test]
    fn orbit_distance_clamps_through_engine() {
        let mut options = Options::default();
        options.intro.enabled = false;
        options.orbit.damping_enabled = false;
        let mut e = engine(options);
        e.on_asset_loaded(Ok(floor_asset()));

        let _ = e.execute(SceneCommand::Zoom { delta: -50.0 });
        let _ = e.tick(Instant::now());
        assert!((e.camera().distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn damped_rotation_keeps_moving_after_input() {
        let mut options = Options::default();
        options.intro.enabled = false;
        let mut e = engine(options);
        e.on_asset_loaded(Ok(floor_asset()));
        let t0 = Instant::now();

        let _ = e.execute(SceneCommand::RotateCamera {
            delta: glam::Vec2::new(40.0, 0.0),
        });
        let _ = e.tick(t0);
        let first = e.camera().eye;
        let _ = e.tick(t0 + ms(16));
        let second = e.camera().eye;
        assert_ne!(first, Vec3::new(0.0, 3.0, 5.0));
        assert_ne!(second, first);
    }

    #[test]
    fn teardown_stops_the_loop() {
        let mut e = engine(Options::default());
        e.on_asset_loaded(Ok(floor_asset()));
        let t0 = Instant::now();
        let _ = e.tick(t0);
        e.teardown();
        e.teardown();
        assert!(!e.is_alive());

        let eye = e.camera().eye;
        assert_eq!(e.tick(t0 + ms(16)), FrameStatus::Stopped);
        assert_eq!(e.surface().frames.len(), 1);
        assert_eq!(e.camera().eye, eye);
    }

    #[test]
    fn failed_load_stops_after_intro() {
        let mut options = Options::default();
        options.intro.duration_ms = 100.0;
        let mut e = engine(options);
        let t0 = Instant::now();
        let _ = e.tick(t0);
        e.on_asset_loaded(Err(VitrineError::AssetLoad("404".into())));

        assert_eq!(e.tick(t0 + ms(50)), FrameStatus::Continue);
        assert_eq!(e.tick(t0 + ms(150)), FrameStatus::Stopped);
        assert_eq!(e.camera().eye, Vec3::new(0.0, 3.0, 5.0));
        assert!(e.surface().frames.is_empty());
    }
}
