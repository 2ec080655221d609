/// Wire layout shared with the JS renderer.
/// Must stay in sync with `web/js/protocol.js`.
///
/// Each section lives in its own WASM-memory buffer, read through a pointer
/// and a count exported by the runner. All values are f32 / 4 bytes:
/// ```text
/// [Meshes: max_meshes × 28 floats]
/// [Lines:  max_line_vertices × 6 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// [Camera: 20 floats]
/// ```
///
/// JS reads capacities and strides once at init from `header()`.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::{LineVertex, MeshInstance};

/// Number of floats in the header.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_MAX_MESHES: usize = 1;
pub const HEADER_MESH_FLOATS: usize = 2;
pub const HEADER_MAX_LINE_VERTICES: usize = 3;
pub const HEADER_LINE_VERTEX_FLOATS: usize = 4;
pub const HEADER_MAX_LIGHTS: usize = 5;
pub const HEADER_LIGHT_FLOATS: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_FLOATS: usize = 8;
pub const HEADER_CAMERA_FLOATS: usize = 9;
pub const HEADER_VIEWPORT_WIDTH: usize = 10;
pub const HEADER_VIEWPORT_HEIGHT: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per point light: x, y, z, r, g, b, intensity, distance.
pub const LIGHT_FLOATS: usize = 8;

/// Default maximum point lights.
pub const DEFAULT_MAX_LIGHTS: usize = 4;

/// Capacities and section sizes computed from a `GameConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_meshes: usize,
    pub max_line_vertices: usize,
    pub max_lights: usize,
    pub max_events: usize,

    /// Size of each section in floats.
    pub mesh_data_floats: usize,
    pub line_data_floats: usize,
    pub light_data_floats: usize,
    pub event_data_floats: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_meshes: usize, max_line_vertices: usize, max_lights: usize, max_events: usize) -> Self {
        Self {
            max_meshes,
            max_line_vertices,
            max_lights,
            max_events,
            mesh_data_floats: max_meshes * MeshInstance::FLOATS,
            line_data_floats: max_line_vertices * LineVertex::FLOATS,
            light_data_floats: max_lights * LIGHT_FLOATS,
            event_data_floats: max_events * GameEvent::FLOATS,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_meshes,
            config.max_line_vertices,
            config.max_lights,
            config.max_events,
        )
    }

    /// Header describing capacities and strides for the given viewport.
    pub fn header(&self, viewport_width: f32, viewport_height: f32) -> [f32; HEADER_FLOATS] {
        let mut h = [0.0; HEADER_FLOATS];
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h[HEADER_MAX_MESHES] = self.max_meshes as f32;
        h[HEADER_MESH_FLOATS] = MeshInstance::FLOATS as f32;
        h[HEADER_MAX_LINE_VERTICES] = self.max_line_vertices as f32;
        h[HEADER_LINE_VERTEX_FLOATS] = LineVertex::FLOATS as f32;
        h[HEADER_MAX_LIGHTS] = self.max_lights as f32;
        h[HEADER_LIGHT_FLOATS] = LIGHT_FLOATS as f32;
        h[HEADER_MAX_EVENTS] = self.max_events as f32;
        h[HEADER_EVENT_FLOATS] = GameEvent::FLOATS as f32;
        h[HEADER_CAMERA_FLOATS] = CameraUniform::FLOATS as f32;
        h[HEADER_VIEWPORT_WIDTH] = viewport_width;
        h[HEADER_VIEWPORT_HEIGHT] = viewport_height;
        h
    }

    /// Total floats across all sections, camera included.
    pub fn total_floats(&self) -> usize {
        self.mesh_data_floats
            + self.line_data_floats
            + self.light_data_floats
            + self.event_data_floats
            + CameraUniform::FLOATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        assert_eq!(layout.max_meshes, 256);
        assert_eq!(layout.mesh_data_floats, 256 * 28);
        assert_eq!(layout.line_data_floats, 4096 * 6);
        assert_eq!(layout.light_data_floats, DEFAULT_MAX_LIGHTS * 8);
        assert_eq!(layout.event_data_floats, 32 * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(10, 20, 2, 5);
        assert_eq!(layout.total_floats(), 10 * 28 + 20 * 6 + 2 * 8 + 5 * 4 + 20);
    }

    #[test]
    fn header_carries_strides_and_viewport() {
        let layout = ProtocolLayout::new(64, 128, 1, 8);
        let h = layout.header(1280.0, 720.0);
        assert_eq!(h[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(h[HEADER_MAX_MESHES], 64.0);
        assert_eq!(h[HEADER_MESH_FLOATS], 28.0);
        assert_eq!(h[HEADER_LIGHT_FLOATS], 8.0);
        assert_eq!(h[HEADER_CAMERA_FLOATS], 20.0);
        assert_eq!(h[HEADER_VIEWPORT_WIDTH], 1280.0);
        assert_eq!(h[HEADER_VIEWPORT_HEIGHT], 720.0);
    }
}
