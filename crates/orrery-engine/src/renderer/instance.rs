use bytemuck::{Pod, Zeroable};

/// Per-mesh render data read by the JS renderer.
/// Must match the JS protocol: 28 floats = 112 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Column-major world matrix.
    pub model: [f32; 16],
    /// `Geometry::code`.
    pub geometry: f32,
    /// `Geometry::params`.
    pub params: [f32; 3],
    /// Texture slot, or -1.0 for untextured.
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 0 = basic (unlit), 1 = standard (lit).
    pub shading: f32,
    /// 0 = front, 1 = back, 2 = double.
    pub side: f32,
    /// Scene node index, for debugging and host-side picking.
    pub node: f32,
    pub _pad: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 28;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Line-list vertex: consecutive pairs form one segment.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 6;
}

/// Everything the renderer draws for one frame.
pub struct RenderBuffer {
    pub meshes: Vec<MeshInstance>,
    pub lines: Vec<LineVertex>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256, 4096)
    }

    pub fn with_capacity(max_meshes: usize, max_line_vertices: usize) -> Self {
        Self {
            meshes: Vec::with_capacity(max_meshes),
            lines: Vec::with_capacity(max_line_vertices),
        }
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
        self.lines.clear();
    }

    pub fn push_mesh(&mut self, instance: MeshInstance) {
        self.meshes.push(instance);
    }

    pub fn push_segment(&mut self, a: LineVertex, b: LineVertex) {
        self.lines.push(a);
        self.lines.push(b);
    }

    pub fn mesh_count(&self) -> u32 {
        self.meshes.len() as u32
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Raw pointer to mesh data for zero-copy reads from JS.
    pub fn meshes_ptr(&self) -> *const f32 {
        self.meshes.as_ptr() as *const f32
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_28_floats() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<LineVertex>(), LineVertex::FLOATS * 4);
    }

    #[test]
    fn segments_push_vertex_pairs() {
        let mut buf = RenderBuffer::new();
        buf.push_segment(LineVertex::default(), LineVertex::default());
        buf.push_mesh(MeshInstance::default());
        assert_eq!(buf.line_vertex_count(), 2);
        assert_eq!(buf.mesh_count(), 1);
        buf.clear();
        assert_eq!(buf.mesh_count(), 0);
    }
}
