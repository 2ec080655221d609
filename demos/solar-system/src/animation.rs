/// Animation Step: everything that moves once per display tick.

use orrery_engine::Scene;

use crate::bodies::SUN_SPIN;
use crate::builder::SolarScene;

/// Advance the scene by one tick at host time `t_ms` and speed multiplier
/// `speed`. Rotations accumulate; nothing is ever recomputed from scratch.
pub fn step(scene: &mut Scene, solar: &SolarScene, speed: f32, t_ms: f64) {
    scene.rotate_y(solar.sun, speed * SUN_SPIN);

    for body in &solar.bodies {
        scene.rotate_y(body.pivot, speed * body.orbital_speed);
        scene.rotate_y(body.mesh, speed * body.self_speed);
    }

    for object in &solar.drifting {
        object.step(scene, t_ms);
    }
}
