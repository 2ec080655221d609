//! Orbit camera controls: drag to orbit around the target, wheel to zoom.

use glam::{Vec2, Vec3};
use crate::input::queue::InputEvent;
use crate::renderer::camera::PerspectiveCamera;

/// Spherical orbit state around `PerspectiveCamera::target`.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Rotation around the Y axis (radians).
    azimuth: f32,
    /// Angle from the +Y axis (radians), kept away from the poles.
    polar: f32,
    /// Distance from target.
    distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians of orbit per pixel dragged.
    pub rotate_speed: f32,
    /// Fractional zoom per wheel unit.
    pub zoom_speed: f32,
    pointer_down: bool,
    last_pointer: Vec2,
}

impl OrbitControls {
    const MIN_POLAR: f32 = 0.01;
    const MAX_POLAR: f32 = std::f32::consts::PI - 0.01;

    /// Start from the camera's current position relative to its target.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let distance = offset.length().max(1e-3);
        Self {
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            distance,
            min_distance: 20.0,
            max_distance: 450.0,
            rotate_speed: 0.005,
            zoom_speed: 0.001,
            pointer_down: false,
            last_pointer: Vec2::ZERO,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit by a pointer delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * self.rotate_speed;
        self.polar = (self.polar - dy * self.rotate_speed).clamp(Self::MIN_POLAR, Self::MAX_POLAR);
    }

    /// Zoom by a wheel delta (positive = away from target).
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 + delta * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Feed one input event. Returns true if the camera moved.
    pub fn handle(&mut self, event: &InputEvent, camera: &mut PerspectiveCamera) -> bool {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.pointer_down = true;
                self.last_pointer = Vec2::new(x, y);
                false
            }
            InputEvent::PointerMove { x, y } => {
                if !self.pointer_down {
                    return false;
                }
                let pos = Vec2::new(x, y);
                let delta = pos - self.last_pointer;
                self.last_pointer = pos;
                if delta == Vec2::ZERO {
                    return false;
                }
                self.orbit(delta.x, delta.y);
                self.apply(camera);
                true
            }
            InputEvent::PointerUp { .. } => {
                self.pointer_down = false;
                false
            }
            InputEvent::Wheel { delta } => {
                self.zoom(delta);
                self.apply(camera);
                true
            }
            _ => false,
        }
    }

    /// Write the orbit state into the camera position.
    pub fn apply(&self, camera: &mut PerspectiveCamera) {
        let sin_polar = self.polar.sin();
        let offset = Vec3::new(
            self.distance * sin_polar * self.azimuth.sin(),
            self.distance * self.polar.cos(),
            self.distance * sin_polar * self.azimuth.cos(),
        );
        camera.position = camera.target + offset;
    }
}
