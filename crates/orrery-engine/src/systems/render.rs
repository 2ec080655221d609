use glam::Vec4Swizzles;
use crate::assets::registry::TextureRegistry;
use crate::components::mesh::{Shading, Side};
use crate::components::node::NodeKind;
use crate::core::scene::Scene;
use crate::renderer::instance::{LineVertex, MeshInstance, RenderBuffer};

/// Build the render buffer from the scene graph.
///
/// Every effectively visible mesh becomes one `MeshInstance` carrying its
/// world matrix. Every visible line loop is flattened to world-space segments.
/// Textures that failed to load are written as -1 so the host draws the
/// material color instead.
pub fn build_render_buffer(scene: &Scene, textures: &TextureRegistry, buffer: &mut RenderBuffer) {
    buffer.clear();
    let transforms = scene.world_transforms();

    for (node, &(world, visible)) in scene.iter().zip(transforms.iter()) {
        if !visible {
            continue;
        }

        match &node.kind {
            NodeKind::Group => {}
            NodeKind::Mesh(mesh) => {
                let texture = mesh
                    .material
                    .texture
                    .and_then(|id| textures.render_slot(id))
                    .map_or(-1.0, |slot| slot as f32);
                let color = mesh.material.color;
                buffer.push_mesh(MeshInstance {
                    model: world.to_cols_array(),
                    geometry: mesh.geometry.code(),
                    params: mesh.geometry.params(),
                    texture,
                    r: color.r,
                    g: color.g,
                    b: color.b,
                    shading: match mesh.material.shading {
                        Shading::Basic => 0.0,
                        Shading::Standard => 1.0,
                    },
                    side: match mesh.material.side {
                        Side::Front => 0.0,
                        Side::Back => 1.0,
                        Side::Double => 2.0,
                    },
                    node: node.id.0 as f32,
                    _pad: 0.0,
                });
            }
            NodeKind::Line(line) => {
                let c = line.color;
                let vertex = |p: glam::Vec3| {
                    let w = (world * p.extend(1.0)).xyz();
                    LineVertex { x: w.x, y: w.y, z: w.z, r: c.r, g: c.g, b: c.b }
                };
                let points = line.points();
                for pair in points.windows(2) {
                    buffer.push_segment(vertex(pair[0]), vertex(pair[1]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{Color, Geometry, LineLoop, Material, MeshComponent};
    use crate::components::node::SceneNode;
    use glam::Vec3;

    fn ball() -> SceneNode {
        SceneNode::mesh(MeshComponent::new(Geometry::sphere(1.0, 8), Material::standard()))
    }

    #[test]
    fn hidden_subtrees_are_skipped() {
        let mut scene = Scene::new();
        let reg = TextureRegistry::new();
        let pivot = scene.spawn(SceneNode::group());
        scene.spawn_child(pivot, ball());
        scene.spawn(ball());
        scene.set_visible(pivot, false);

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &reg, &mut buf);
        assert_eq!(buf.mesh_count(), 1);
    }

    #[test]
    fn mesh_instance_carries_world_translation() {
        let mut scene = Scene::new();
        let reg = TextureRegistry::new();
        let pivot = scene.spawn(SceneNode::group().with_translation(Vec3::new(0.0, 5.0, 0.0)));
        scene.spawn_child(pivot, ball().with_translation(Vec3::new(10.0, 0.0, 0.0)));

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &reg, &mut buf);
        let m = &buf.meshes[0].model;
        assert_eq!([m[12], m[13], m[14]], [10.0, 5.0, 0.0]);
        assert_eq!(buf.meshes[0].shading, 1.0);
        assert_eq!(buf.meshes[0].texture, -1.0);
    }

    #[test]
    fn failed_texture_falls_back_to_untextured() {
        let mut scene = Scene::new();
        let mut reg = TextureRegistry::new();
        let good = reg.intern("earth");
        let bad = reg.intern("mars");
        reg.mark_failed(bad).unwrap();
        scene.spawn(SceneNode::mesh(MeshComponent::new(
            Geometry::sphere(1.0, 8),
            Material::basic().with_texture(Some(good)),
        )));
        scene.spawn(SceneNode::mesh(MeshComponent::new(
            Geometry::sphere(1.0, 8),
            Material::basic().with_texture(Some(bad)),
        )));

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &reg, &mut buf);
        assert_eq!(buf.meshes[0].texture, good.0 as f32);
        assert_eq!(buf.meshes[1].texture, -1.0);
    }

    #[test]
    fn line_loop_becomes_segment_pairs() {
        let mut scene = Scene::new();
        let reg = TextureRegistry::new();
        scene.spawn(SceneNode::line(LineLoop::circle(28.0, 100, Color::WHITE)));

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &reg, &mut buf);
        assert_eq!(buf.line_vertex_count(), 200);
        let v = buf.lines[0];
        assert!((Vec3::new(v.x, v.y, v.z).length() - 28.0).abs() < 1e-3);
    }

    #[test]
    fn rebuild_replaces_previous_frame() {
        let mut scene = Scene::new();
        let reg = TextureRegistry::new();
        scene.spawn(ball());
        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &reg, &mut buf);
        build_render_buffer(&scene, &reg, &mut buf);
        assert_eq!(buf.mesh_count(), 1);
    }
}
