/// Scene Builder: constructs the static world once at startup.
///
/// Per body: a pivot group at the origin, the planet mesh offset on the
/// pivot's +X, an optional ring beside it on the same pivot, and an orbit
/// guide of the same radius at the scene root.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use orrery_engine::*;

use crate::bodies::{self, BodySpec, RingSpec};
use crate::drift::{random_position, DriftKind, DriftingObject};

/// How many decorative objects to scatter, and the layout seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub asteroid_count: usize,
    pub hazard_count: usize,
    pub comet_count: usize,
    /// Fixed seed for reproducible layouts. `None` uses the host seed.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asteroid_count: 10,
            hazard_count: 3,
            comet_count: 2,
            seed: None,
        }
    }
}

/// A planet and the frames that move it.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub pivot: NodeId,
    pub mesh: NodeId,
    pub ring: Option<NodeId>,
    pub distance: f32,
    pub orbital_speed: f32,
    pub self_speed: f32,
}

/// Handles to everything the animation, options and picking touch.
#[derive(Debug, Clone, Default)]
pub struct SolarScene {
    pub background: NodeId,
    pub sun: NodeId,
    pub bodies: Vec<CelestialBody>,
    /// One orbit guide per body, same order.
    pub paths: Vec<NodeId>,
    pub drifting: Vec<DriftingObject>,
}

impl SolarScene {
    pub fn drifting_of(&self, kind: DriftKind) -> impl Iterator<Item = &DriftingObject> {
        self.drifting.iter().filter(move |d| d.kind == kind)
    }
}

fn textured(textures: &mut TextureRegistry, material: Material, name: &str) -> Material {
    material.with_texture(Some(textures.intern(name)))
}

/// Add one body with its pivot, optional ring and orbit guide.
/// Returns the body and its guide.
pub fn add_body(
    scene: &mut Scene,
    textures: &mut TextureRegistry,
    spec: &BodySpec,
) -> (CelestialBody, NodeId) {
    let pivot = scene.spawn(SceneNode::group().with_tag(format!("{}_pivot", spec.name)));
    let offset = Vec3::new(spec.distance, 0.0, 0.0);

    let planet = MeshComponent::new(
        Geometry::sphere(spec.size, bodies::PLANET_SEGMENTS),
        textured(textures, Material::standard(), spec.texture),
    );
    let mesh = spawn_under(scene, pivot, SceneNode::mesh(planet).with_tag(spec.name).with_translation(offset));

    let ring = spec.ring.map(|ring| add_ring(scene, textures, pivot, offset, &ring, spec.name));

    let path = scene.spawn(
        SceneNode::line(LineLoop::circle(
            spec.distance,
            bodies::PATH_SEGMENTS,
            Color::from_hex(bodies::PATH_COLOR),
        ))
        .with_tag(format!("{}_path", spec.name)),
    );

    let body = CelestialBody {
        name: spec.name,
        pivot,
        mesh,
        ring,
        distance: spec.distance,
        orbital_speed: spec.orbital_speed,
        self_speed: spec.self_speed,
    };
    (body, path)
}

fn add_ring(
    scene: &mut Scene,
    textures: &mut TextureRegistry,
    pivot: NodeId,
    offset: Vec3,
    ring: &RingSpec,
    owner: &str,
) -> NodeId {
    let geometry = Geometry::Ring {
        inner_radius: ring.inner_radius,
        outer_radius: ring.outer_radius,
        segments: bodies::RING_SEGMENTS,
    };
    let material = textured(textures, Material::basic(), ring.texture).with_side(Side::Double);
    let node = SceneNode::mesh(MeshComponent::new(geometry, material))
        .with_tag(format!("{}_ring", owner))
        .with_translation(offset)
        .with_rotation(Quat::from_rotation_x(-FRAC_PI_2));
    spawn_under(scene, pivot, node)
}

/// Pivots are always spawned just before their children.
fn spawn_under(scene: &mut Scene, parent: NodeId, node: SceneNode) -> NodeId {
    match scene.spawn_child(parent, node.clone()) {
        Some(id) => id,
        None => {
            log::warn!("parent {:?} missing, spawning '{}' at root", parent, node.tag);
            scene.spawn(node)
        }
    }
}

fn add_drifting(
    scene: &mut Scene,
    textures: &mut TextureRegistry,
    rng: &mut Rng,
    kind: DriftKind,
    index: usize,
) -> DriftingObject {
    let (size, band) = match kind {
        DriftKind::Asteroid => (bodies::ASTEROID_SIZE, bodies::ASTEROID_BAND),
        DriftKind::Hazardous => (bodies::ASTEROID_SIZE, bodies::HAZARD_BAND),
        DriftKind::Comet => (bodies::COMET_SIZE, bodies::COMET_BAND),
    };
    let position = random_position(rng, band);

    let mut material = textured(textures, Material::standard(), bodies::ASTEROID_TEXTURE);
    if kind == DriftKind::Hazardous {
        material = material.with_color(Color::from_hex(bodies::HAZARD_COLOR));
    }
    let head = MeshComponent::new(
        Geometry::Icosahedron { radius: size, detail: bodies::ASTEROID_DETAIL },
        material,
    );
    let node = scene.spawn(SceneNode::mesh(head).with_tag(kind.tag()).with_translation(position));

    if kind == DriftKind::Comet {
        let tail = MeshComponent::new(
            Geometry::Cone {
                radius: size * 2.0,
                height: size * 5.0,
                segments: bodies::COMET_TAIL_SEGMENTS,
            },
            Material::basic()
                .with_color(Color::from_hex(bodies::COMET_TAIL_COLOR))
                .with_side(Side::Double),
        );
        spawn_under(
            scene,
            node,
            SceneNode::mesh(tail)
                .with_tag("comet_tail")
                .with_translation(Vec3::new(0.0, -size * 2.0, 0.0))
                .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        );
    }

    DriftingObject { node, kind, index }
}

/// Build the whole scene into `ctx`: backdrop, sun, lights, bodies, guides
/// and drifting objects.
pub fn build(ctx: &mut EngineContext, config: &SceneConfig) -> SolarScene {
    let scene = &mut ctx.scene;
    let textures = &mut ctx.textures;

    let backdrop = MeshComponent::new(
        Geometry::sphere(bodies::BACKGROUND_RADIUS, bodies::BACKGROUND_SEGMENTS),
        textured(textures, Material::basic(), bodies::STAR_TEXTURE).with_side(Side::Back),
    );
    let background = scene.spawn(SceneNode::mesh(backdrop).with_tag("background"));

    let sun_mesh = MeshComponent::new(
        Geometry::sphere(bodies::SUN_RADIUS, bodies::SUN_SEGMENTS),
        textured(textures, Material::basic(), bodies::SUN_TEXTURE),
    );
    let sun = scene.spawn(SceneNode::mesh(sun_mesh).with_tag("sun"));

    ctx.lights.add(PointLight::new(
        Vec3::ZERO,
        [1.0, 1.0, 1.0],
        bodies::SUN_LIGHT_INTENSITY,
        bodies::SUN_LIGHT_DISTANCE,
    ));
    ctx.lights.set_ambient(AmbientLight { color: [1.0, 1.0, 1.0], intensity: 0.0 });

    let mut solar = SolarScene {
        background,
        sun,
        ..SolarScene::default()
    };

    for spec in &bodies::BODIES {
        let (body, path) = add_body(scene, textures, spec);
        solar.bodies.push(body);
        solar.paths.push(path);
    }

    let mut rng = Rng::new(config.seed.unwrap_or(ctx.seed));
    let groups = [
        (DriftKind::Asteroid, config.asteroid_count),
        (DriftKind::Hazardous, config.hazard_count),
        (DriftKind::Comet, config.comet_count),
    ];
    for (kind, count) in groups {
        for index in 0..count {
            solar.drifting.push(add_drifting(scene, textures, &mut rng, kind, index));
        }
    }

    log::info!(
        "solar system built: {} bodies, {} paths, {} drifting objects, {} nodes",
        solar.bodies.len(),
        solar.paths.len(),
        solar.drifting.len(),
        scene.len(),
    );
    solar
}
