//! In-memory surface for engine tests.

use glam::Vec3;

use super::RenderSurface;
use crate::camera::Camera;
use crate::scene::{AssetMesh, AssetNode, SceneAsset, SceneGraph};

/// A single floor quad one unit below the origin.
pub(crate) fn floor_asset() -> SceneAsset {
    SceneAsset {
        name: "floor".into(),
        nodes: vec![AssetNode {
            name: "floor".into(),
            translation: [0.0, -1.0, 0.0],
            mesh: Some(AssetMesh {
                positions: vec![
                    [-5.0, 0.0, -5.0],
                    [5.0, 0.0, -5.0],
                    [5.0, 0.0, 5.0],
                    [-5.0, 0.0, 5.0],
                ],
                triangles: vec![[0, 2, 1], [0, 3, 2]],
            }),
            ..AssetNode::default()
        }],
    }
}

/// Records everything the engine asks of it.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) size: (u32, u32),
    pub(crate) resizes: Vec<(u32, u32)>,
    /// Camera eye and aspect at each rendered frame.
    pub(crate) frames: Vec<(Vec3, f32)>,
    /// Node count of the scene at each rendered frame.
    pub(crate) node_counts: Vec<usize>,
    pub(crate) errors: Vec<String>,
}

impl RecordingSurface {
    pub(crate) fn sized(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes.push((width, height));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, scene: &SceneGraph, camera: &Camera) {
        self.frames.push((camera.eye, camera.aspect()));
        self.node_counts.push(scene.len());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}
