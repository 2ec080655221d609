/// Body table: sizes, orbital distances, rotation rates, rings and fact pages.
///
/// Units are scene units and radians per tick at speed 1. Distances are
/// compressed for readability, not to scale.

/// Planet index constants.
pub const MERCURY: usize = 0;
pub const VENUS: usize = 1;
pub const EARTH: usize = 2;
pub const MARS: usize = 3;
pub const JUPITER: usize = 4;
pub const SATURN: usize = 5;
pub const URANUS: usize = 6;
pub const NEPTUNE: usize = 7;
pub const PLUTO: usize = 8;
pub const PLANET_COUNT: usize = 9;

// ── Sun & backdrop ───────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 15.0;
pub const SUN_SEGMENTS: u32 = 50;
pub const SUN_TEXTURE: &str = "sun";
/// Sun spin per tick at speed 1.
pub const SUN_SPIN: f32 = 0.004;

pub const SUN_LIGHT_INTENSITY: f32 = 4.0;
pub const SUN_LIGHT_DISTANCE: f32 = 300.0;

pub const BACKGROUND_RADIUS: f32 = 500.0;
pub const BACKGROUND_SEGMENTS: u32 = 32;
pub const STAR_TEXTURE: &str = "star";

// ── Planets ──────────────────────────────────────────────────────────

pub const PLANET_SEGMENTS: u32 = 50;
pub const RING_SEGMENTS: u32 = 32;
/// Orbit guides are closed loops of this many segments.
pub const PATH_SEGMENTS: u32 = 100;
pub const PATH_COLOR: u32 = 0xffffff;

/// Annulus around a planet, lying in the orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

/// One orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub texture: &'static str,
    pub size: f32,
    /// Distance from the sun along the pivot's +X axis.
    pub distance: f32,
    /// Pivot rotation per tick at speed 1.
    pub orbital_speed: f32,
    /// Mesh rotation per tick at speed 1.
    pub self_speed: f32,
    pub ring: Option<RingSpec>,
    /// Fact page opened when the body is clicked.
    pub url: &'static str,
}

pub const BODIES: [BodySpec; PLANET_COUNT] = [
    BodySpec {
        name: "mercury", texture: "mercury", size: 3.2, distance: 28.0,
        orbital_speed: 0.004, self_speed: 0.004, ring: None,
        url: "https://science.nasa.gov/mercury/facts/",
    },
    BodySpec {
        name: "venus", texture: "venus", size: 5.8, distance: 44.0,
        orbital_speed: 0.015, self_speed: 0.002, ring: None,
        url: "https://science.nasa.gov/venus/venus-facts/",
    },
    BodySpec {
        name: "earth", texture: "earth", size: 6.0, distance: 62.0,
        orbital_speed: 0.01, self_speed: 0.02, ring: None,
        url: "https://science.nasa.gov/earth/facts/",
    },
    BodySpec {
        name: "mars", texture: "mars", size: 4.0, distance: 78.0,
        orbital_speed: 0.008, self_speed: 0.018, ring: None,
        url: "https://science.nasa.gov/mars/facts/",
    },
    BodySpec {
        name: "jupiter", texture: "jupiter", size: 12.0, distance: 100.0,
        orbital_speed: 0.002, self_speed: 0.04, ring: None,
        url: "https://science.nasa.gov/jupiter/jupiter-facts/",
    },
    BodySpec {
        name: "saturn", texture: "saturn", size: 10.0, distance: 138.0,
        orbital_speed: 0.0009, self_speed: 0.038,
        ring: Some(RingSpec { inner_radius: 10.0, outer_radius: 20.0, texture: "saturn_ring" }),
        url: "https://science.nasa.gov/saturn/facts/",
    },
    BodySpec {
        name: "uranus", texture: "uranus", size: 7.0, distance: 176.0,
        orbital_speed: 0.0004, self_speed: 0.03,
        ring: Some(RingSpec { inner_radius: 7.0, outer_radius: 12.0, texture: "uranus_ring" }),
        url: "https://science.nasa.gov/uranus/facts/",
    },
    BodySpec {
        name: "neptune", texture: "neptune", size: 7.0, distance: 200.0,
        orbital_speed: 0.0001, self_speed: 0.032, ring: None,
        url: "https://science.nasa.gov/neptune/neptune-facts/",
    },
    BodySpec {
        name: "pluto", texture: "pluto", size: 2.8, distance: 216.0,
        orbital_speed: 0.0007, self_speed: 0.008, ring: None,
        url: "https://science.nasa.gov/dwarf-planets/pluto/facts/",
    },
];

// ── Drifting objects ─────────────────────────────────────────────────

pub const ASTEROID_TEXTURE: &str = "asteroid";
pub const ASTEROID_SIZE: f32 = 3.0;
pub const ASTEROID_DETAIL: u32 = 1;
/// Inner radius of the band asteroids are scattered in.
pub const ASTEROID_BAND: f32 = 80.0;
pub const HAZARD_BAND: f32 = 120.0;
pub const HAZARD_COLOR: u32 = 0xff0000;

pub const COMET_SIZE: f32 = 2.0;
pub const COMET_BAND: f32 = 160.0;
pub const COMET_TAIL_COLOR: u32 = 0xffffaa;
pub const COMET_TAIL_SEGMENTS: u32 = 8;

/// Spin per tick for every drifting object, independent of speed.
pub const DRIFT_SPIN: f32 = 0.01;
