use glam::{Mat4, Quat, Vec3};

use super::mesh::Mesh;

/// Stable handle to a node in a [`SceneGraph`](super::SceneGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) u32);

impl NodeId {
    /// Index into the graph's node storage.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local translation / rotation / scale relative to the parent node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Offset from the parent origin.
    pub translation: Vec3,
    /// Orientation relative to the parent.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No offset, rotation, or scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Pure translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}

/// Surface appearance. Lighting and texturing belong to the renderer; the
/// controller only carries what a surface needs to draw a flat colour and
/// an optional text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Linear RGB in `[0, 1]`.
    pub color: [f32; 3],
    /// Text drawn on the object, if any.
    pub label: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [0.7, 0.7, 0.7],
            label: None,
        }
    }
}

/// What happens when an interactive object is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveAction {
    /// Open `url` in a new browsing context.
    OpenUrl(String),
}

/// Marks a node as clickable. Attached when the scene is built; hit
/// resolution checks for this tag rather than inspecting geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveTag {
    /// Action bound to the node.
    pub action: InteractiveAction,
}

/// A node in the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Human-readable name.
    pub name: String,
    /// Transform relative to the parent.
    pub transform: Transform,
    /// Geometry, if the node draws anything.
    pub mesh: Option<Mesh>,
    /// Surface appearance.
    pub material: Material,
    /// Click behaviour, for the one interactive object.
    pub interactive: Option<InteractiveTag>,
    /// Hidden nodes (and their subtrees) are neither drawn nor picked.
    pub visible: bool,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl SceneNode {
    /// An empty, visible grouping node.
    #[must_use]
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            mesh: None,
            material: Material::default(),
            interactive: None,
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }

    /// A visible node drawing `mesh`.
    #[must_use]
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name)
        }
    }

    /// Set the local transform.
    #[must_use]
    pub fn transformed(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Attach an interactive tag.
    #[must_use]
    pub fn interactive(mut self, action: InteractiveAction) -> Self {
        self.interactive = Some(InteractiveTag { action });
        self
    }

    /// Parent node, `None` for roots.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
