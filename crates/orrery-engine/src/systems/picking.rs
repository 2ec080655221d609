//! Ray casting against scene meshes.
//!
//! Meshes are tested as their bounding spheres in world space. For sphere
//! geometry that is the exact surface.

use glam::Vec3;
use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// A half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the first sphere surface crossing in front of
    /// the origin, if any.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = -b - sqrt_d;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + sqrt_d;
        if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub node: NodeId,
    /// Distance along the ray.
    pub distance: f32,
    pub point: Vec3,
}

/// Test `ray` against the given mesh nodes and return the nearest hit.
///
/// Nodes that are missing, hidden, or carry no mesh are skipped.
pub fn pick_nearest(scene: &Scene, ray: &Ray, candidates: &[NodeId]) -> Option<PickHit> {
    if ray.direction == Vec3::ZERO {
        return None;
    }
    let transforms = scene.world_transforms();

    let mut best: Option<PickHit> = None;
    for &id in candidates {
        let Some(node) = scene.get(id) else { continue };
        let Some(mesh) = node.mesh_component() else { continue };
        let Some(&(world, visible)) = transforms.get(id.index()) else { continue };
        if !visible {
            continue;
        }

        let center = world.w_axis.truncate();
        let (scale, _, _) = world.to_scale_rotation_translation();
        let radius = mesh.geometry.bounding_radius() * scale.max_element();

        if let Some(distance) = ray.intersect_sphere(center, radius) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PickHit { node: id, distance, point: ray.at(distance) });
            }
        }
    }
    best
}
