use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::scene::Aabb;

/// Determinant magnitude below which a ray counts as parallel to a
/// triangle.
const PARALLEL_EPS: f32 = 1e-8;

/// Convert a pointer position in viewport pixels (origin top-left, Y down)
/// to normalized device coordinates (origin centre, Y up, `[-1, 1]`).
///
/// Returns `None` for a degenerate viewport.
#[must_use]
pub fn pointer_to_ndc(
    client_x: f32,
    client_y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Option<Vec2> {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client_x / viewport_width) * 2.0 - 1.0,
        -(client_y / viewport_height) * 2.0 + 1.0,
    ))
}

/// Half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through an NDC point.
    #[must_use]
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let inverse = camera.build_matrix().inverse();
        // [0,1] depth range: 0.5 is a point strictly inside the frustum.
        let through = inverse.project_point3(ndc.extend(0.5));
        Self::new(camera.eye, through - camera.eye)
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the first point inside `aabb` (slab test). A ray that
    /// starts inside the box reports `0`.
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let inv = self.direction.recip();
        let t0 = (aabb.min - self.origin) * inv;
        let t1 = (aabb.max - self.origin) * inv;
        let near = t0.min(t1);
        let far = t0.max(t1);

        // NaN components (axis-parallel ray exactly on a slab plane) are
        // ignored by `max_element`/`min_element`.
        let t_enter = near.max_element().max(0.0);
        let t_exit = far.min_element();
        (t_enter <= t_exit).then_some(t_enter)
    }

    /// Distance to a triangle, hitting either face (Moller-Trumbore).
    #[must_use]
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        let edge1 = b - a;
        let edge2 = c - a;
        let p = self.direction.cross(edge2);
        let det = edge1.dot(p);
        if det.abs() < PARALLEL_EPS {
            return None;
        }
        let inv_det = 1.0 / det;

        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let q = s.cross(edge1);
        let v = self.direction.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = edge2.dot(q) * inv_det;
        (t >= 0.0).then_some(t)
    }
}
