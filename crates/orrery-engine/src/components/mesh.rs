use glam::Vec3;
use crate::api::types::TextureId;

/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Procedural geometry the JS renderer tessellates.
/// Wire codes are stable: see `Geometry::code`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere { radius: f32, width_segments: u32, height_segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring { inner_radius: f32, outer_radius: f32, segments: u32 },
    Icosahedron { radius: f32, detail: u32 },
    /// Cone along local +Y, centered on its half height.
    Cone { radius: f32, height: f32, segments: u32 },
}

impl Geometry {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Geometry::Sphere { radius, width_segments: segments, height_segments: segments }
    }

    /// Numeric tag written to the render buffer.
    pub fn code(&self) -> f32 {
        match self {
            Geometry::Sphere { .. } => 0.0,
            Geometry::Ring { .. } => 1.0,
            Geometry::Icosahedron { .. } => 2.0,
            Geometry::Cone { .. } => 3.0,
        }
    }

    /// Three shape parameters, meaning depends on `code`.
    pub fn params(&self) -> [f32; 3] {
        match *self {
            Geometry::Sphere { radius, width_segments, height_segments } => {
                [radius, width_segments as f32, height_segments as f32]
            }
            Geometry::Ring { inner_radius, outer_radius, segments } => {
                [inner_radius, outer_radius, segments as f32]
            }
            Geometry::Icosahedron { radius, detail } => [radius, detail as f32, 0.0],
            Geometry::Cone { radius, height, segments } => [radius, height, segments as f32],
        }
    }

    /// Radius of a sphere centered on the local origin that encloses the shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Geometry::Sphere { radius, .. } => radius,
            Geometry::Ring { outer_radius, .. } => outer_radius,
            Geometry::Icosahedron { radius, .. } => radius,
            Geometry::Cone { radius, height, .. } => (radius * radius + height * height * 0.25).sqrt(),
        }
    }
}

/// Whether a surface responds to scene lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Unlit, always drawn at full texture color.
    #[default]
    Basic,
    /// Lit by ambient and point lights.
    Standard,
}

/// Which faces are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    pub texture: Option<TextureId>,
    /// Multiplied with the texture (or used alone when there is none).
    pub color: Color,
    pub shading: Shading,
    pub side: Side,
}

impl Material {
    pub fn basic() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self { shading: Shading::Standard, ..Self::default() }
    }

    pub fn with_texture(mut self, texture: Option<TextureId>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }
}

/// A drawable surface attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

/// Closed circular polyline in the local XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLoop {
    pub radius: f32,
    pub segments: u32,
    pub color: Color,
}

impl LineLoop {
    pub fn circle(radius: f32, segments: u32, color: Color) -> Self {
        Self { radius, segments: segments.max(3), color }
    }

    /// Sample points around the circle. The first point is repeated at the end
    /// so consecutive pairs cover the whole loop.
    pub fn points(&self) -> Vec<Vec3> {
        let n = self.segments;
        (0..=n)
            .map(|i| {
                let angle = (i as f32 / n as f32) * std::f32::consts::TAU;
                Vec3::new(self.radius * angle.cos(), 0.0, self.radius * angle.sin())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_unpacks_channels() {
        let c = Color::from_hex(0xff0000);
        assert_eq!(c, Color::new(1.0, 0.0, 0.0));
        let c = Color::from_hex(0xffffaa);
        assert!((c.b - 170.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn line_loop_points_lie_on_circle_and_close() {
        let path = LineLoop::circle(62.0, 100, Color::WHITE);
        let points = path.points();
        assert_eq!(points.len(), 101);
        for p in &points {
            assert!((p.length() - 62.0).abs() < 1e-3);
            assert_eq!(p.y, 0.0);
        }
        assert!((points[0] - points[100]).length() < 1e-3);
    }

    #[test]
    fn ring_bounds_by_outer_radius() {
        let ring = Geometry::Ring { inner_radius: 10.0, outer_radius: 20.0, segments: 32 };
        assert_eq!(ring.bounding_radius(), 20.0);
        assert_eq!(ring.params(), [10.0, 20.0, 32.0]);
    }
}
