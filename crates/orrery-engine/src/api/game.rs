use glam::Vec3;
use crate::api::types::GameEvent;
use crate::assets::registry::TextureRegistry;
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::query::QueryParams;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::controls::OrbitControls;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::viewport::Viewport;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial surface size in pixels, replaced by the first resize.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    /// Attach drag-to-orbit / wheel-to-zoom controls to the camera.
    pub orbit_controls: bool,
    /// Maximum number of mesh instances (default: 256).
    pub max_meshes: usize,
    /// Maximum number of line vertices (default: 4096).
    pub max_line_vertices: usize,
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 100.0),
            camera_target: Vec3::ZERO,
            orbit_controls: true,
            max_meshes: 256,
            max_line_vertices: 4096,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene and lights. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One display tick. Input is everything queued since the previous tick.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only render pass after the scene has been flattened.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: Option<OrbitControls>,
    pub viewport: Viewport,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub clock: FrameClock,
    /// Page query string, parsed once at init.
    pub query: QueryParams,
    /// Seed for scene randomness.
    pub seed: u64,
    pub events: Vec<GameEvent>,
    navigation: Option<String>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let viewport = Viewport::new(config.viewport_width, config.viewport_height);
        let aspect = viewport.aspect().unwrap_or(1.0);
        let camera = PerspectiveCamera::new(config.fov_y_degrees, aspect, config.near, config.far)
            .with_position(config.camera_position)
            .with_target(config.camera_target);
        let controls = config.orbit_controls.then(|| OrbitControls::from_camera(&camera));
        Self {
            scene: Scene::with_capacity(config.max_meshes),
            camera,
            controls,
            viewport,
            lights: LightState::with_capacity(config.max_lights),
            textures: TextureRegistry::new(),
            clock: FrameClock::new(),
            query: QueryParams::default(),
            seed: 42,
            events: Vec::with_capacity(config.max_events),
            navigation: None,
        }
    }

    /// Track a new surface size. The camera aspect follows unless the size is
    /// degenerate, in which case the previous aspect is kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width.max(0.0), height.max(0.0));
        if let Some(aspect) = self.viewport.aspect() {
            self.camera.aspect = aspect;
            self.camera.update_projection_matrix();
        }
    }

    /// Request a full-page navigation. The host performs it after the tick.
    pub fn navigate(&mut self, url: impl Into<String>) {
        let url = url.into();
        log::info!("navigating to {}", url);
        self.navigation = Some(url);
    }

    /// Pending navigation, if any. Clears it.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }

    pub fn pending_navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    /// Emit a game event to be forwarded to JS.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Feed pointer and wheel input to the orbit controls. Returns true if the
    /// camera moved.
    pub fn apply_controls(&mut self, input: &InputQueue) -> bool {
        let Some(controls) = self.controls.as_mut() else {
            return false;
        };
        let mut moved = false;
        for event in input.iter() {
            moved |= controls.handle(event, &mut self.camera);
        }
        moved
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::InputEvent;

    #[test]
    fn context_starts_with_empty_scene() {
        let ctx = EngineContext::from_config(&GameConfig { max_meshes: 64, ..GameConfig::default() });
        assert!(ctx.scene.is_empty());
        assert!(ctx.pending_navigation().is_none());
    }

    #[test]
    fn resize_updates_aspect_and_viewport() {
        let mut ctx = EngineContext::new();
        ctx.resize(1920.0, 1080.0);
        assert_eq!(ctx.viewport, Viewport::new(1920.0, 1080.0));
        assert!((ctx.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        let expected = glam::Mat4::perspective_rh_gl(75f32.to_radians(), 1920.0 / 1080.0, 0.1, 1000.0);
        assert!(ctx.camera.projection_matrix().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn zero_height_keeps_previous_aspect() {
        let mut ctx = EngineContext::new();
        ctx.resize(1000.0, 500.0);
        ctx.resize(1000.0, 0.0);
        assert_eq!(ctx.camera.aspect, 2.0);
        assert!(ctx.camera.projection_matrix().is_finite());
        assert_eq!(ctx.viewport.height, 0.0);
    }

    #[test]
    fn navigation_is_taken_once() {
        let mut ctx = EngineContext::new();
        assert!(ctx.take_navigation().is_none());
        ctx.navigate("https://example.org/earth");
        assert_eq!(ctx.pending_navigation(), Some("https://example.org/earth"));
        assert_eq!(ctx.take_navigation().as_deref(), Some("https://example.org/earth"));
        assert!(ctx.take_navigation().is_none());
    }

    #[test]
    fn controls_follow_config() {
        let config = GameConfig { orbit_controls: false, ..GameConfig::default() };
        let mut ctx = EngineContext::from_config(&config);
        let mut input = InputQueue::new();
        input.push(InputEvent::Wheel { delta: 100.0 });
        assert!(!ctx.apply_controls(&input));

        let mut ctx = EngineContext::new();
        assert!(ctx.apply_controls(&input));
    }
}
