use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::constraints::OrbitConstraints;
use super::core::Camera;

/// Squared eye displacement below which an update counts as "no change".
const CHANGE_EPS: f32 = 1e-6;
/// Keeps the polar angle off the poles where `look_at` degenerates.
const POLE_EPS: f32 = 1e-6;
/// Pending motion below this magnitude is dropped.
const REST_EPS: f32 = 1e-6;

/// Spherical coordinates of an eye offset around its target, Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Angle from the +Y axis.
    polar: f32,
    /// Angle around Y, measured from +Z toward +X.
    azimuth: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                polar: 0.0,
                azimuth: 0.0,
            };
        }
        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        Vec3::new(
            ring * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            ring * self.azimuth.cos(),
        )
    }
}

/// Orbit-style camera control around the camera's target.
///
/// Input (`rotate`, `zoom`, `pan`) only accumulates pending motion;
/// [`update`](Self::update) integrates it into the camera and must run
/// exactly once per rendered frame. With damping enabled each update
/// applies `damping_factor` of the pending motion and keeps the rest, so
/// motion decelerates after input stops. Distance and polar angle are
/// clamped on every update.
///
/// The eye is re-read from the camera each update, so other writers of
/// `camera.eye` (such as an intro transition) compose with orbit input.
#[derive(Debug, Clone)]
pub struct OrbitController {
    constraints: OrbitConstraints,
    /// Pending azimuth / polar change in radians.
    rotate_delta: Vec2,
    /// Pending pan in pixels (x right, y down).
    pan_delta: Vec2,
    /// Pending multiplicative distance change.
    scale: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl OrbitController {
    /// Create a controller enforcing `constraints`.
    #[must_use]
    pub fn new(constraints: OrbitConstraints) -> Self {
        Self {
            constraints,
            rotate_delta: Vec2::ZERO,
            pan_delta: Vec2::ZERO,
            scale: 1.0,
            rotate_speed: 0.01,
            pan_speed: 0.002,
            zoom_speed: 0.1,
        }
    }

    /// Override input sensitivities.
    ///
    /// `rotate` is radians per pixel, `pan` is world units per pixel per
    /// unit of camera distance, `zoom` scales the exponential dolly.
    #[must_use]
    pub fn with_speeds(mut self, rotate: f32, pan: f32, zoom: f32) -> Self {
        self.rotate_speed = rotate;
        self.pan_speed = pan;
        self.zoom_speed = zoom;
        self
    }

    /// The constraints this controller enforces.
    #[must_use]
    pub fn constraints(&self) -> &OrbitConstraints {
        &self.constraints
    }

    /// Whether any motion is still waiting to be integrated.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.rotate_delta != Vec2::ZERO
            || self.pan_delta != Vec2::ZERO
            || self.scale != 1.0
    }

    /// Queue an orbit from a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.rotate_delta -= delta * self.rotate_speed;
    }

    /// Queue a dolly. Positive `delta` moves toward the target.
    pub fn zoom(&mut self, delta: f32) {
        self.scale *= (-delta * self.zoom_speed).exp();
    }

    /// Queue a pan from a pointer drag of `delta` pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_delta += delta;
    }

    /// Drop all pending motion.
    pub fn stop(&mut self) {
        self.rotate_delta = Vec2::ZERO;
        self.pan_delta = Vec2::ZERO;
        self.scale = 1.0;
    }

    /// Integrate pending motion into `camera` and enforce the bounds.
    ///
    /// Returns `true` if the camera moved. The camera is left untouched
    /// when nothing changed, so an eye written by another driver stays
    /// bit-exact.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let damping = self.constraints.damping_enabled();
        let factor = if damping {
            self.constraints.damping_factor()
        } else {
            1.0
        };

        let mut wanted = Spherical::from_offset(camera.eye - camera.target);
        wanted.azimuth += self.rotate_delta.x * factor;
        wanted.polar += self.rotate_delta.y * factor;
        wanted.radius *= self.scale;

        let mut spherical = wanted;
        spherical.polar = self.constraints.clamp_polar(wanted.polar);
        spherical.radius = self.constraints.clamp_distance(wanted.radius);
        // A bound correction is written however small it is.
        let clamped = spherical.polar != wanted.polar
            || spherical.radius != wanted.radius;
        spherical.polar = spherical.polar.clamp(POLE_EPS, PI - POLE_EPS);

        let pan = self.pan_offset(camera, spherical.radius) * factor;
        let target = camera.target + pan;
        let eye = target + spherical.to_offset();

        let changed = clamped
            || eye.distance_squared(camera.eye) > CHANGE_EPS
            || pan.length_squared() > CHANGE_EPS;
        if changed {
            camera.target = target;
            camera.eye = eye;
        }

        self.scale = 1.0;
        if damping {
            self.rotate_delta *= 1.0 - factor;
            self.pan_delta *= 1.0 - factor;
            if self.rotate_delta.length() < REST_EPS {
                self.rotate_delta = Vec2::ZERO;
            }
            if self.pan_delta.length() < REST_EPS {
                self.pan_delta = Vec2::ZERO;
            }
        } else {
            self.rotate_delta = Vec2::ZERO;
            self.pan_delta = Vec2::ZERO;
        }
        changed
    }

    /// Convert the pending pixel pan into a world-space target offset in
    /// the camera's screen plane.
    fn pan_offset(&self, camera: &Camera, distance: f32) -> Vec3 {
        if self.pan_delta == Vec2::ZERO {
            return Vec3::ZERO;
        }
        let forward = camera.forward();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let scale = self.pan_speed * distance;
        (right * -self.pan_delta.x + up * self.pan_delta.y) * scale
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

    use super::*;

    fn showcase(damping: bool) -> OrbitController {
        OrbitController::new(
            OrbitConstraints::new(3.0, 10.0, FRAC_PI_6, FRAC_PI_2, 0.2, damping)
                .unwrap(),
        )
    }

    fn camera_at(eye: Vec3) -> Camera {
        Camera::new(eye, Vec3::ZERO, 30.0, 1.0, 0.1, 1000.0)
    }

    fn polar(camera: &Camera) -> f32 {
        Spherical::from_offset(camera.eye - camera.target).polar
    }

    #[test]
    fn spherical_round_trips_offsets() {
        let offset = Vec3::new(1.0, 2.0, 3.0);
        let back = Spherical::from_offset(offset).to_offset();
        assert!((back - offset).length() < 1e-5);
    }

    #[test]
    fn requested_distance_beyond_max_lands_on_max() {
        let mut orbit = showcase(false);
        // Distance 15, polar angle inside bounds.
        let mut camera = camera_at(Vec3::new(0.0, 9.0, 12.0));
        assert!(orbit.update(&mut camera));
        assert!((camera.distance() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn distance_barely_past_max_is_still_clamped() {
        let mut orbit = showcase(false);
        let mut camera = camera_at(Vec3::new(0.0, 0.6, 0.8) * 10.0008);
        assert!(orbit.update(&mut camera));
        assert!((camera.distance() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn polar_barely_past_max_is_still_clamped() {
        let mut orbit = showcase(false);
        // 1e-4 rad below the horizon moves the eye by far less than the
        // idle threshold.
        let below = FRAC_PI_2 + 1e-4;
        let mut camera =
            camera_at(Vec3::new(0.0, 5.0 * below.cos(), 5.0 * below.sin()));
        assert!(orbit.update(&mut camera));
        assert!(polar(&camera) <= FRAC_PI_2 + 1e-6);
        assert!(camera.eye.y >= -1e-6);
    }

    #[test]
    fn zoom_out_past_max_is_clamped() {
        let mut orbit = showcase(false);
        let mut camera = camera_at(Vec3::new(0.0, 5.0, 5.0));
        orbit.zoom(-50.0);
        let _ = orbit.update(&mut camera);
        assert!((camera.distance() - 10.0).abs() < 1e-4);

        orbit.zoom(50.0);
        let _ = orbit.update(&mut camera);
        assert!((camera.distance() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn polar_zero_is_raised_to_min() {
        let mut orbit = showcase(false);
        let mut camera = camera_at(Vec3::new(0.0, 5.0, 0.0));
        assert!(orbit.update(&mut camera));
        assert!((polar(&camera) - FRAC_PI_6).abs() < 1e-4);
    }

    #[test]
    fn drag_cannot_cross_the_horizon() {
        let mut orbit = showcase(false);
        let mut camera = camera_at(Vec3::new(0.0, 4.0, 4.0));
        // Dragging up lowers the camera toward and past the horizon.
        orbit.rotate(Vec2::new(0.0, -500.0));
        let _ = orbit.update(&mut camera);
        assert!((polar(&camera) - FRAC_PI_2).abs() < 1e-4);
        assert!(camera.eye.y.abs() < 1e-3);
    }

    #[test]
    fn undamped_input_applies_in_one_update() {
        let mut orbit = showcase(false);
        let mut camera = camera_at(Vec3::new(0.0, 4.0, 4.0));
        orbit.rotate(Vec2::new(10.0, 0.0));
        assert!(orbit.update(&mut camera));
        assert!(!orbit.is_moving());
        assert!(!orbit.update(&mut camera));
    }

    #[test]
    fn damped_motion_decays_over_frames() {
        let mut orbit = showcase(true);
        let mut camera = camera_at(Vec3::new(0.0, 4.0, 4.0));
        orbit.rotate(Vec2::new(50.0, 0.0));

        let mut steps = Vec::new();
        for _ in 0..5 {
            let before = camera.eye;
            assert!(orbit.update(&mut camera));
            steps.push(before.distance(camera.eye));
        }
        for pair in steps.windows(2) {
            assert!(pair[1] < pair[0], "steps should shrink: {steps:?}");
        }
        assert!(orbit.is_moving());

        for _ in 0..200 {
            let _ = orbit.update(&mut camera);
        }
        assert!(!orbit.is_moving());
    }

    #[test]
    fn idle_update_leaves_eye_bit_exact() {
        let mut orbit = showcase(true);
        let eye = Vec3::new(0.3, 3.1, 4.7);
        let mut camera = camera_at(eye);
        assert!(!orbit.update(&mut camera));
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn pan_moves_target_and_eye_together() {
        let mut orbit = showcase(false);
        let mut camera = camera_at(Vec3::new(0.0, 4.0, 4.0));
        let offset = camera.eye - camera.target;
        orbit.pan(Vec2::new(100.0, 0.0));
        assert!(orbit.update(&mut camera));
        assert!(camera.target.x < 0.0);
        assert!((camera.eye - camera.target - offset).length() < 1e-4);
    }
}
