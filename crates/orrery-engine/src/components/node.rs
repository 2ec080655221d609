use glam::{Mat4, Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::mesh::{LineLoop, MeshComponent};

/// What a node contributes to the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Invisible reference frame (pivots, grouping).
    Group,
    Mesh(MeshComponent),
    Line(LineLoop),
}

/// Fat scene node: transform relative to its parent plus an optional payload.
/// Designed for simplicity over ECS purity, like the rest of the engine.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Assigned by `Scene` on spawn.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Owning node. Always spawned before this one.
    pub parent: Option<NodeId>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Hidden nodes hide their whole subtree.
    pub visible: bool,
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId(0),
            tag: String::new(),
            parent: None,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            visible: true,
            kind,
        }
    }

    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    pub fn mesh(mesh: MeshComponent) -> Self {
        Self::new(NodeKind::Mesh(mesh))
    }

    pub fn line(line: LineLoop) -> Self {
        Self::new(NodeKind::Line(line))
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Transform from this node's space into its parent's space.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    pub fn mesh_component(&self) -> Option<&MeshComponent> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}
