/// Asteroids and comets: no pivot, position nudged every tick by a sinusoid
/// of elapsed host time, phase-shifted by the object's index.

use glam::Vec3;
use orrery_engine::{NodeId, Rng, Scene};

use crate::bodies::DRIFT_SPIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftKind {
    Asteroid,
    Hazardous,
    Comet,
}

impl DriftKind {
    /// Angular frequency applied to host milliseconds.
    pub fn frequency(self) -> f64 {
        match self {
            DriftKind::Asteroid => 0.0005,
            DriftKind::Hazardous => 0.0007,
            DriftKind::Comet => 0.0003,
        }
    }

    /// Per-tick displacement amplitude.
    pub fn amplitude(self) -> f32 {
        match self {
            DriftKind::Asteroid => 0.02,
            DriftKind::Hazardous => 0.04,
            DriftKind::Comet => 0.03,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            DriftKind::Asteroid => "asteroid",
            DriftKind::Hazardous => "hazardous",
            DriftKind::Comet => "comet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftingObject {
    pub node: NodeId,
    pub kind: DriftKind,
    /// Position within its kind's list, used as phase.
    pub index: usize,
}

impl DriftingObject {
    /// Displacement for one tick at host time `t_ms`.
    pub fn offset(&self, t_ms: f64) -> Vec3 {
        let phase = t_ms * self.kind.frequency() + self.index as f64;
        let a = self.kind.amplitude();
        Vec3::new(phase.sin() as f32 * a, 0.0, phase.cos() as f32 * a)
    }

    /// Move and spin the object's node.
    pub fn step(&self, scene: &mut Scene, t_ms: f64) {
        scene.translate(self.node, self.offset(t_ms));
        scene.rotate_y(self.node, DRIFT_SPIN);
    }
}

/// Random point in a horizontal band: radius in `[radius, radius + 30)`,
/// any angle, height in `[-5, 5)`.
pub fn random_position(rng: &mut Rng, radius: f32) -> Vec3 {
    let angle = rng.range_f32(0.0, std::f32::consts::TAU);
    let distance = radius + rng.range_f32(0.0, 30.0);
    Vec3::new(
        distance * angle.cos(),
        rng.range_f32(-5.0, 5.0),
        distance * angle.sin(),
    )
}
