use glam::{Mat4, Vec2, Vec3};

use super::ray::Ray;
use crate::camera::Camera;
use crate::scene::{NodeId, SceneGraph, SceneNode};

/// One object hit by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The node whose mesh was hit.
    pub node: NodeId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Casts a ray against scene meshes.
///
/// Each node contributes at most one hit (its closest triangle). Results
/// are sorted by ascending distance, so the first entry is the object the
/// user actually sees under the pointer.
#[derive(Debug, Clone, Copy)]
pub struct Raycaster {
    /// The ray being cast.
    pub ray: Ray,
    /// Hits closer than this are ignored.
    pub near: f32,
    /// Hits farther than this are ignored.
    pub far: f32,
}

impl Raycaster {
    /// Cast `ray` with no distance limits.
    #[must_use]
    pub fn new(ray: Ray) -> Self {
        Self {
            ray,
            near: 0.0,
            far: f32::INFINITY,
        }
    }

    /// Cast from the camera eye through an NDC point. Hits start at the
    /// eye itself, not at the near plane, and end at the far plane.
    #[must_use]
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Self {
        Self {
            ray: Ray::from_ndc(camera, ndc),
            near: 0.0,
            far: camera.zfar(),
        }
    }

    /// Intersect every visible node reachable from the roots.
    #[must_use]
    pub fn intersect_scene(&self, graph: &SceneGraph) -> Vec<Hit> {
        let mut hits = Vec::new();
        graph.visit_all_visible(&mut |id, node, world| {
            if let Some(hit) = self.intersect_mesh(id, node, world) {
                hits.push(hit);
            }
        });
        sort_hits(&mut hits);
        hits
    }

    /// Intersect one node and, when `recursive`, its descendants.
    #[must_use]
    pub fn intersect_node(
        &self,
        graph: &SceneGraph,
        id: NodeId,
        recursive: bool,
    ) -> Vec<Hit> {
        let mut hits = Vec::new();
        graph.visit_visible(id, recursive, &mut |visited, node, world| {
            if let Some(hit) = self.intersect_mesh(visited, node, world) {
                hits.push(hit);
            }
        });
        sort_hits(&mut hits);
        hits
    }

    fn intersect_mesh(
        &self,
        id: NodeId,
        node: &SceneNode,
        world: &Mat4,
    ) -> Option<Hit> {
        let mesh = node.mesh.as_ref()?;
        let bounds = mesh.bounds().transformed(world);
        if self.ray.intersect_aabb(&bounds)? > self.far {
            return None;
        }

        let distance = mesh
            .triangle_positions()
            .filter_map(|tri| {
                let [a, b, c] = tri.map(|p| world.transform_point3(p));
                self.ray.intersect_triangle(a, b, c)
            })
            .filter(|t| (self.near..=self.far).contains(t))
            .min_by(f32::total_cmp)?;

        Some(Hit {
            node: id,
            distance,
            point: self.ray.at(distance),
        })
    }
}

fn sort_hits(hits: &mut [Hit]) {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}
