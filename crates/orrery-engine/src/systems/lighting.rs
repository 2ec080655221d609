/// Scene lighting: one ambient term plus persistent point lights.
///
/// Only materials with `Shading::Standard` respond to lights. Each frame the
/// runner exposes the lights to the JS renderer as flat floats.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A point light with position, color, intensity and falloff distance.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, distance]`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Range beyond which the light contributes nothing (0 = infinite).
    pub distance: f32,
}

impl PointLight {
    /// - `pos`: World-space position
    /// - `color`: RGB color in [0..1]
    /// - `intensity`: Light strength multiplier
    /// - `distance`: Falloff range in world units
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32, distance: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Uniform, direction-independent fill light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 0.0,
        }
    }
}

/// Manages active lights and the ambient term for the scene.
///
/// Lights are persistent: add them once and they stay until removed.
/// Ambient defaults to white at zero intensity, so unlit sides stay black.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: AmbientLight,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: AmbientLight::default(),
        }
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: AmbientLight::default(),
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all point lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn as_slice(&self) -> &[PointLight] {
        &self.lights
    }

    /// Number of active point lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, ambient: AmbientLight) {
        self.ambient = ambient;
    }

    pub fn set_ambient_intensity(&mut self, intensity: f32) {
        self.ambient.intensity = intensity;
    }

    pub fn ambient(&self) -> AmbientLight {
        self.ambient
    }

    /// Pointer to the lights data for zero-copy reads from JS.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), [1.0, 0.5, 0.0], 4.0, 300.0);
        assert_eq!(light.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.g, 0.5);
        assert_eq!(light.intensity, 4.0);
        assert_eq!(light.distance, 300.0);
    }

    #[test]
    fn light_state_add_and_clear() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 1.0, 50.0));
        state.add(PointLight::new(Vec3::X, [0.5; 3], 2.0, 100.0));
        assert_eq!(state.count(), 2);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn ambient_defaults_to_dark_white() {
        let state = LightState::new();
        assert_eq!(state.ambient().color, [1.0, 1.0, 1.0]);
        assert_eq!(state.ambient().intensity, 0.0);
    }

    #[test]
    fn set_ambient_intensity_keeps_color() {
        let mut state = LightState::new();
        state.set_ambient(AmbientLight { color: [0.2, 0.2, 0.25], intensity: 1.0 });
        state.set_ambient_intensity(0.5);
        assert_eq!(state.ambient().color, [0.2, 0.2, 0.25]);
        assert_eq!(state.ambient().intensity, 0.5);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }
}
