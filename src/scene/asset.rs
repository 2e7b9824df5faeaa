//! glTF scene asset: the model shown next to the labeled cube.
//!
//! [`SceneAsset::from_slice`] decodes a `.gltf` document with embedded
//! (data URI) buffers, or a binary `.glb`, into an owned node tree. Only
//! the default scene is read. Triangle primitives become meshes, with
//! the node's TRS (or decomposed matrix) as its transform and the first
//! primitive's base colour as its material. Geometry is validated by
//! [`SceneAsset::instantiate`] before anything enters the graph.

use std::path::Path;

use glam::{Quat, Vec3};
use gltf::mesh::Mode;

use super::mesh::Mesh;
use super::node::{Material, NodeId, SceneNode, Transform};
use super::SceneGraph;
use crate::error::VitrineError;

/// Decoded triangle geometry of one node, all primitives merged.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetMesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Triangle vertex indices.
    pub triangles: Vec<[u32; 3]>,
}

/// One node of the asset tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetNode {
    /// Node name.
    pub name: String,
    /// Offset from the parent.
    pub translation: [f32; 3],
    /// Rotation quaternion `[x, y, z, w]`.
    pub rotation: [f32; 4],
    /// Per-axis scale.
    pub scale: [f32; 3],
    /// Geometry, if any.
    pub mesh: Option<AssetMesh>,
    /// Linear RGB colour.
    pub color: [f32; 3],
    /// Whether the node starts visible.
    pub visible: bool,
    /// Nested nodes.
    pub children: Vec<AssetNode>,
}

impl Default for AssetNode {
    fn default() -> Self {
        Self {
            name: String::new(),
            translation: [0.0; 3],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0; 3],
            mesh: None,
            color: Material::default().color,
            visible: true,
            children: Vec::new(),
        }
    }
}

/// A loadable scene: the model shown next to the labeled cube.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneAsset {
    /// Asset name, used for the group node it is instantiated under.
    pub name: String,
    /// Top-level nodes.
    pub nodes: Vec<AssetNode>,
}

impl SceneAsset {
    /// Decode a glTF or GLB document.
    ///
    /// Buffers must be embedded; external buffer files are not resolved.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, VitrineError> {
        let (document, buffers, _images) = gltf::import_slice(bytes)
            .map_err(|e| VitrineError::AssetParse(e.to_string()))?;
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or_else(|| {
                VitrineError::AssetParse("document has no scene".into())
            })?;

        let nodes = scene
            .nodes()
            .map(|node| read_node(&node, &buffers))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "decoded glTF scene {:?} with {} root nodes",
            scene.name(),
            nodes.len()
        );
        Ok(Self {
            name: scene.name().unwrap_or_default().to_owned(),
            nodes,
        })
    }

    /// Read and decode an asset file.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let bytes = std::fs::read(path).map_err(|e| {
            VitrineError::AssetLoad(format!("{}: {e}", path.display()))
        })?;
        Self::from_slice(&bytes)
    }

    /// Add the asset to `graph` under a new group node and return that
    /// group's id.
    ///
    /// Validates every mesh first, so a bad asset leaves the graph
    /// untouched.
    pub fn instantiate(
        &self,
        graph: &mut SceneGraph,
    ) -> Result<NodeId, VitrineError> {
        let built = self
            .nodes
            .iter()
            .map(build_node)
            .collect::<Result<Vec<_>, _>>()?;

        let name = if self.name.is_empty() {
            "model"
        } else {
            self.name.as_str()
        };
        let group = graph.add(None, SceneNode::group(name));
        for node in built {
            node.insert(graph, group);
        }
        Ok(group)
    }
}

/// Prefix parse errors with the node they came from.
fn in_node(name: &str, err: VitrineError) -> VitrineError {
    match err {
        VitrineError::AssetParse(msg) => {
            VitrineError::AssetParse(format!("node {name:?}: {msg}"))
        }
        other => other,
    }
}

fn read_node(
    node: &gltf::Node<'_>,
    buffers: &[gltf::buffer::Data],
) -> Result<AssetNode, VitrineError> {
    let name = node
        .name()
        .map_or_else(|| format!("node{}", node.index()), str::to_owned);
    let (translation, rotation, scale) = node.transform().decomposed();

    let (mesh, color) = match node.mesh() {
        Some(mesh) => read_mesh(&mesh, buffers).map_err(|e| in_node(&name, e))?,
        None => (None, None),
    };
    let children = node
        .children()
        .map(|child| read_node(&child, buffers))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AssetNode {
        name,
        translation,
        rotation,
        scale,
        mesh,
        color: color.unwrap_or(Material::default().color),
        visible: true,
        children,
    })
}

/// Merge the triangle primitives of `mesh`. Points and lines are skipped.
fn read_mesh(
    mesh: &gltf::Mesh<'_>,
    buffers: &[gltf::buffer::Data],
) -> Result<(Option<AssetMesh>, Option<[f32; 3]>), VitrineError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut triangles = Vec::new();
    let mut color = None;

    for primitive in mesh.primitives() {
        if primitive.mode() != Mode::Triangles {
            log::debug!("skipping {:?} primitive", primitive.mode());
            continue;
        }
        let reader = primitive.reader(|buffer| {
            buffers.get(buffer.index()).map(|data| data.0.as_slice())
        });
        let points = reader.read_positions().ok_or_else(|| {
            VitrineError::AssetParse("triangle primitive without positions".into())
        })?;

        let base = index_of(positions.len())?;
        positions.extend(points);
        let count = index_of(positions.len())? - base;
        let indices: Vec<u32> = match reader.read_indices() {
            Some(indices) => indices.into_u32().collect(),
            None => (0..count).collect(),
        };
        if indices.len() % 3 != 0 {
            return Err(VitrineError::AssetParse(format!(
                "{} indices do not form whole triangles",
                indices.len()
            )));
        }
        if let Some(bad) = indices.iter().find(|&&i| i >= count) {
            return Err(VitrineError::AssetParse(format!(
                "index {bad} out of range for {count} vertices"
            )));
        }
        triangles.extend(
            indices
                .chunks_exact(3)
                .map(|t| [t[0] + base, t[1] + base, t[2] + base]),
        );

        if color.is_none() {
            let [r, g, b, _] = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();
            color = Some([r, g, b]);
        }
    }

    let mesh = (!triangles.is_empty()).then_some(AssetMesh {
        positions,
        triangles,
    });
    Ok((mesh, color))
}

fn index_of(len: usize) -> Result<u32, VitrineError> {
    u32::try_from(len).map_err(|_| {
        VitrineError::AssetParse(format!("{len} vertices exceed the index range"))
    })
}

/// A validated node awaiting insertion.
struct BuiltNode {
    node: SceneNode,
    children: Vec<BuiltNode>,
}

impl BuiltNode {
    fn insert(self, graph: &mut SceneGraph, parent: NodeId) {
        let id = graph.add(Some(parent), self.node);
        for child in self.children {
            child.insert(graph, id);
        }
    }
}

fn build_node(asset: &AssetNode) -> Result<BuiltNode, VitrineError> {
    let mesh = asset
        .mesh
        .as_ref()
        .map(|m| {
            Mesh::new(
                m.positions.iter().copied().map(Vec3::from).collect(),
                m.triangles.clone(),
            )
            .map_err(|e| in_node(&asset.name, e))
        })
        .transpose()?;

    let rotation = Quat::from_array(asset.rotation);
    let rotation = if rotation.length_squared() > 0.0 {
        rotation.normalize()
    } else {
        Quat::IDENTITY
    };

    let mut node = SceneNode::group(asset.name.clone())
        .transformed(Transform {
            translation: Vec3::from(asset.translation),
            rotation,
            scale: Vec3::from(asset.scale),
        })
        .with_material(Material {
            color: asset.color,
            label: None,
        });
    node.mesh = mesh;
    node.visible = asset.visible;

    let children = asset
        .children
        .iter()
        .map(build_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BuiltNode { node, children })
}
