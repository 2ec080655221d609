//! Renderer trait for hosts that draw the engine's frame output.
//!
//! In the browser all drawing happens in JS (WebGL) from the flat buffers the
//! runner exports. This trait is the same contract for Rust-side consumers:
//! native backends, and test doubles that record frames.

use super::camera::CameraUniform;
use super::instance::{LineVertex, MeshInstance};
use crate::systems::lighting::{AmbientLight, PointLight};

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    pub meshes: &'a [MeshInstance],
    /// Line list (vertex pairs).
    pub lines: &'a [LineVertex],
    pub camera: CameraUniform,
    pub ambient: AmbientLight,
    pub lights: &'a [PointLight],
    /// Surface size in device pixels.
    pub width: f32,
    pub height: f32,
}

pub trait Renderer {
    /// Backend identifier (e.g. "webgl2", "headless").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Resize the drawing surface to exactly `width` x `height` pixels.
    fn resize(&mut self, width: u32, height: u32);
}
