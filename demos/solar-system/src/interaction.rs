/// Interaction Handler: a click picks the nearest planet under the cursor and
/// resolves it to that planet's fact page.

use std::collections::HashMap;

use orrery_engine::{pick_nearest, NodeId, PerspectiveCamera, Scene, Viewport};

use crate::bodies::BODIES;
use crate::builder::CelestialBody;

/// Planet mesh handle to fact page URL.
#[derive(Debug, Clone, Default)]
pub struct LinkTable {
    urls: HashMap<NodeId, &'static str>,
    /// Pick candidates, in body order.
    targets: Vec<NodeId>,
}

impl LinkTable {
    /// Map each body's mesh to the URL listed for it in the body table.
    pub fn from_bodies(bodies: &[CelestialBody]) -> Self {
        let mut table = Self::default();
        for body in bodies {
            match BODIES.iter().find(|spec| spec.name == body.name) {
                Some(spec) => table.insert(body.mesh, spec.url),
                None => log::warn!("no link for body '{}'", body.name),
            }
        }
        table
    }

    pub fn insert(&mut self, mesh: NodeId, url: &'static str) {
        if self.urls.insert(mesh, url).is_none() {
            self.targets.push(mesh);
        }
    }

    pub fn url(&self, mesh: NodeId) -> Option<&'static str> {
        self.urls.get(&mesh).copied()
    }

    /// Meshes that can be clicked. Sun, rings, guides and asteroids are not.
    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Resolve a click at viewport pixel `(x, y)` to a URL.
///
/// `None` when the viewport is degenerate or the ray misses every planet.
pub fn click_target(
    scene: &Scene,
    camera: &PerspectiveCamera,
    viewport: &Viewport,
    links: &LinkTable,
    x: f32,
    y: f32,
) -> Option<&'static str> {
    let ndc = viewport.to_ndc(x, y)?;
    let ray = camera.ray_from_ndc(ndc);
    let hit = pick_nearest(scene, &ray, links.targets())?;
    links.url(hit.node)
}
