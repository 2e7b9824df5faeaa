//! Scene graph: nodes with transforms, meshes, materials, and the
//! interactive tag carried by the labeled cube.
//!
//! The graph is flat storage addressed by [`NodeId`]; parent/child links
//! form the hierarchy. The loaded model is instantiated from a
//! [`SceneAsset`] under its own group node.

mod asset;
mod mesh;
mod node;

pub use asset::{AssetMesh, AssetNode, SceneAsset};
use glam::{Mat4, Vec3};
pub use mesh::{Aabb, Mesh};
pub use node::{
    InteractiveAction, InteractiveTag, Material, NodeId, SceneNode, Transform,
};
use rustc_hash::FxHashMap;

// ---------------------------------------------------------------------------
// SceneGraph
// ---------------------------------------------------------------------------

/// Owns every node in the scene.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
    /// First node registered under each name.
    names: FxHashMap<String, NodeId>,
}

impl SceneGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `node` under `parent` (or as a root) and return its id.
    ///
    /// A `parent` that does not belong to this graph makes the node a root.
    pub fn add(&mut self, parent: Option<NodeId>, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = parent.filter(|p| p.index() < self.nodes.len());
        node.parent = parent;
        node.children.clear();
        let _ = self.names.entry(node.name.clone()).or_insert(id);
        self.nodes.push(node);

        match parent {
            Some(p) => self.nodes[p.index()].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Read access to a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Write access to a node.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Top-level nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// First node registered under `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// All nodes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Local-to-world matrix of a node, composing every ancestor.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(node) = self.node(current) else {
                break;
            };
            matrix = node.transform.matrix() * matrix;
            cursor = node.parent;
        }
        matrix
    }

    /// Whether the node and all of its ancestors are visible.
    #[must_use]
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.node(current) {
                Some(node) if node.visible => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// Visit `id` and, when `recursive`, its visible descendants,
    /// depth-first, with each node's world matrix. Hidden subtrees are
    /// skipped.
    pub fn visit_visible(
        &self,
        id: NodeId,
        recursive: bool,
        visit: &mut impl FnMut(NodeId, &SceneNode, &Mat4),
    ) {
        if !self.is_visible(id) {
            return;
        }
        let parent_world = self
            .node(id)
            .and_then(|n| n.parent)
            .map_or(Mat4::IDENTITY, |p| self.world_transform(p));
        self.visit_from(id, &parent_world, recursive, visit);
    }

    fn visit_from(
        &self,
        id: NodeId,
        parent_world: &Mat4,
        recursive: bool,
        visit: &mut impl FnMut(NodeId, &SceneNode, &Mat4),
    ) {
        let Some(node) = self.node(id) else {
            return;
        };
        if !node.visible {
            return;
        }
        let world = *parent_world * node.transform.matrix();
        visit(id, node, &world);
        if recursive {
            for &child in &node.children {
                self.visit_from(child, &world, true, visit);
            }
        }
    }

    /// Visit every visible node reachable from the roots.
    pub fn visit_all_visible(
        &self,
        visit: &mut impl FnMut(NodeId, &SceneNode, &Mat4),
    ) {
        for &root in &self.roots {
            self.visit_from(root, &Mat4::IDENTITY, true, visit);
        }
    }

    /// Add the clickable cube: a `size`-sided box at `position` showing
    /// `label`, tagged with `action`.
    pub fn add_labeled_cube(
        &mut self,
        label: &str,
        size: f32,
        position: Vec3,
        action: InteractiveAction,
    ) -> NodeId {
        let node = SceneNode::with_mesh("labeled-cube", Mesh::cuboid(size, size, size))
            .transformed(Transform::from_translation(position))
            .with_material(Material {
                color: [1.0, 1.0, 1.0],
                label: Some(label.to_owned()),
            })
            .interactive(action);
        self.add(None, node)
    }

    /// Ids of every node carrying an interactive tag.
    #[must_use]
    pub fn interactive_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, n)| n.interactive.is_some())
            .map(|(id, _)| id)
            .collect()
    }
}
