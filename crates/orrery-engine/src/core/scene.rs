use glam::{Mat4, Quat, Vec3};
use crate::api::types::NodeId;
use crate::components::node::SceneNode;

/// Arena of scene nodes addressed by index.
///
/// Parent links are explicit indices. A child can only be spawned under an
/// existing node, so a parent always sits at a lower index than its children
/// and world transforms resolve in a single forward pass.
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(64),
        }
    }

    /// Create a scene with a specific node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a top-level node. Returns its handle.
    pub fn spawn(&mut self, mut node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.id = id;
        node.parent = None;
        self.nodes.push(node);
        id
    }

    /// Add a node owned by `parent`. Returns `None` if the parent does not exist.
    pub fn spawn_child(&mut self, parent: NodeId, mut node: SceneNode) -> Option<NodeId> {
        if parent.index() >= self.nodes.len() {
            return None;
        }
        let id = NodeId(self.nodes.len() as u32);
        node.id = id;
        node.parent = Some(parent);
        self.nodes.push(node);
        Some(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Iterate over all nodes in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    /// Direct children of a node, in spawn order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SceneNode> + '_ {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    /// Rotate a node about its own Y axis (object space).
    pub fn rotate_y(&mut self, id: NodeId, angle: f32) {
        if let Some(node) = self.get_mut(id) {
            node.rotation = (node.rotation * Quat::from_rotation_y(angle)).normalize();
        }
    }

    /// Move a node within its parent's space.
    pub fn translate(&mut self, id: NodeId, delta: Vec3) {
        if let Some(node) = self.get_mut(id) {
            node.translation += delta;
        }
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.get_mut(id) {
            node.visible = visible;
        }
    }

    /// World transform of a single node, walking up the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.get(id)?;
        let mut world = node.local_matrix();
        while let Some(parent) = node.parent {
            node = self.get(parent)?;
            world = node.local_matrix() * world;
        }
        Some(world)
    }

    /// World transforms and effective visibility for every node, in index order.
    pub fn world_transforms(&self) -> Vec<(Mat4, bool)> {
        let mut out: Vec<(Mat4, bool)> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.local_matrix();
            let resolved = match node.parent {
                Some(parent) => {
                    let (parent_world, parent_visible) = out[parent.index()];
                    (parent_world * local, parent_visible && node.visible)
                }
                None => (local, node.visible),
            };
            out.push(resolved);
        }
        out
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn spawn_assigns_sequential_ids() {
        let mut scene = Scene::new();
        let a = scene.spawn(SceneNode::group().with_tag("a"));
        let b = scene.spawn(SceneNode::group().with_tag("b"));
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(scene.get(b).unwrap().tag, "b");
    }

    #[test]
    fn spawn_child_requires_existing_parent() {
        let mut scene = Scene::new();
        assert!(scene.spawn_child(NodeId(3), SceneNode::group()).is_none());
        let root = scene.spawn(SceneNode::group());
        let child = scene.spawn_child(root, SceneNode::group()).unwrap();
        assert_eq!(scene.get(child).unwrap().parent, Some(root));
        assert_eq!(scene.children(root).count(), 1);
    }

    #[test]
    fn rotating_pivot_carries_child_around() {
        let mut scene = Scene::new();
        let pivot = scene.spawn(SceneNode::group());
        let child = scene
            .spawn_child(pivot, SceneNode::group().with_translation(Vec3::new(10.0, 0.0, 0.0)))
            .unwrap();

        scene.rotate_y(pivot, FRAC_PI_2);

        let pos = scene.world_matrix(child).unwrap().w_axis.truncate();
        // +X rotated a quarter turn about +Y lands on -Z
        assert!(pos.x.abs() < 1e-4, "x = {}", pos.x);
        assert!((pos.z + 10.0).abs() < 1e-4, "z = {}", pos.z);
    }

    #[test]
    fn spinning_child_in_place_keeps_its_position() {
        let mut scene = Scene::new();
        let pivot = scene.spawn(SceneNode::group());
        let child = scene
            .spawn_child(pivot, SceneNode::group().with_translation(Vec3::new(28.0, 0.0, 0.0)))
            .unwrap();
        scene.rotate_y(child, 1.3);
        let pos = scene.world_matrix(child).unwrap().w_axis.truncate();
        assert!((pos - Vec3::new(28.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn hidden_parent_hides_subtree() {
        let mut scene = Scene::new();
        let parent = scene.spawn(SceneNode::group());
        let child = scene.spawn_child(parent, SceneNode::group()).unwrap();
        scene.set_visible(parent, false);
        let transforms = scene.world_transforms();
        assert!(!transforms[parent.index()].1);
        assert!(!transforms[child.index()].1);
    }

    #[test]
    fn world_transforms_match_single_lookup() {
        let mut scene = Scene::new();
        let pivot = scene.spawn(SceneNode::group());
        let child = scene
            .spawn_child(pivot, SceneNode::group().with_translation(Vec3::new(5.0, 1.0, 0.0)))
            .unwrap();
        scene.rotate_y(pivot, 0.7);
        let all = scene.world_transforms();
        let single = scene.world_matrix(child).unwrap();
        assert!(all[child.index()].0.abs_diff_eq(single, 1e-5));
    }
}
