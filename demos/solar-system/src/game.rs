/// Solar System: textured planets on pivots, drifting asteroids and comets,
/// click-through fact pages and a small option panel.
///
/// Camera: drag to orbit, wheel to zoom (engine orbit controls).

use glam::Vec3;
use orrery_engine::*;

use crate::animation;
use crate::builder::{self, SceneConfig, SolarScene};
use crate::interaction::{click_target, LinkTable};
use crate::options::{self, ViewState};

// ── Camera ───────────────────────────────────────────────────────────

const CAMERA_FOV: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const CAMERA_POSITION: Vec3 = Vec3::new(-50.0, 90.0, 150.0);

pub struct SolarSystem {
    scene_config: SceneConfig,
    view: ViewState,
    solar: SolarScene,
    links: LinkTable,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_scene_config(SceneConfig::default())
    }

    pub fn with_scene_config(scene_config: SceneConfig) -> Self {
        Self {
            scene_config,
            view: ViewState::default(),
            solar: SolarScene::default(),
            links: LinkTable::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn solar(&self) -> &SolarScene {
        &self.solar
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            fov_y_degrees: CAMERA_FOV,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            camera_position: CAMERA_POSITION,
            camera_target: Vec3::ZERO,
            orbit_controls: true,
            max_events: 8,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.view = ViewState::new(options::parse_max_speed(&ctx.query));
        self.solar = builder::build(ctx, &self.scene_config);
        self.links = LinkTable::from_bodies(&self.solar.bodies);

        let realistic = self.view.realistic_lighting;
        self.view.set_realistic_lighting(realistic, &mut ctx.lights);
        let show = self.view.show_paths;
        self.view.set_show_paths(show, &mut ctx.scene, &self.solar.paths);

        log::info!("speed slider range [0, {}]", self.view.max_speed());
        for event in self.view.events() {
            ctx.emit_event(event);
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Option panel ─────────────────────────────────────────────
        for event in input.iter() {
            if let InputEvent::Custom { kind, a, .. } = *event {
                self.view.apply(kind, a, &mut ctx.scene, &mut ctx.lights, &self.solar.paths);
            }
        }

        // ── Clicks pick against what was on screen ───────────────────
        for (x, y) in input.clicks() {
            if let Some(url) = click_target(&ctx.scene, &ctx.camera, &ctx.viewport, &self.links, x, y) {
                ctx.navigate(url);
                break;
            }
        }

        animation::step(&mut ctx.scene, &self.solar, self.view.speed(), ctx.clock.elapsed_ms());

        for event in self.view.events() {
            ctx.emit_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::EARTH;
    use crate::options::{OPTION_REAL_VIEW, OPTION_SHOW_PATH, OPTION_SPEED};
    use glam::Vec2;

    fn ready(search: &str) -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::with_scene_config(SceneConfig { seed: Some(11), ..SceneConfig::default() });
        let mut ctx = EngineContext::from_config(&game.config());
        ctx.query = QueryParams::parse(search);
        ctx.resize(1280.0, 720.0);
        game.init(&mut ctx);
        (game, ctx)
    }

    fn option(kind: u32, value: f32) -> InputEvent {
        InputEvent::Custom { kind, a: value, b: 0.0, c: 0.0 }
    }

    fn tick(game: &mut SolarSystem, ctx: &mut EngineContext, input: &InputQueue, t: f64) {
        ctx.clear_frame_data();
        ctx.clock.advance(t);
        game.update(ctx, input);
    }

    #[test]
    fn new_game_is_empty_until_init() {
        let game = SolarSystem::new();
        assert!(game.solar().bodies.is_empty());
        assert_eq!(game.solar().sun, NodeId::default());
        assert!(game.links().is_empty());
        assert_eq!(game.view().max_speed(), 20.0);
    }

    #[test]
    fn init_uses_query_max_speed() {
        let (game, _) = ready("?ms=40");
        assert_eq!(game.view().max_speed(), 40.0);
        let (game, _) = ready("?ms=abc");
        assert_eq!(game.view().max_speed(), 20.0);
    }

    #[test]
    fn camera_starts_where_configured() {
        let (_, ctx) = ready("");
        assert_eq!(ctx.camera.position, Vec3::new(-50.0, 90.0, 150.0));
        assert_eq!(ctx.camera.fov_y_degrees, 75.0);
        assert!((ctx.camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn options_flow_through_update() {
        let (mut game, mut ctx) = ready("?ms=10");
        let mut input = InputQueue::new();
        input.push(option(OPTION_REAL_VIEW, 0.0));
        input.push(option(OPTION_SHOW_PATH, 0.0));
        input.push(option(OPTION_SPEED, 50.0));
        tick(&mut game, &mut ctx, &input, 16.0);

        assert_eq!(ctx.lights.ambient().intensity, 0.5);
        assert_eq!(game.view().speed(), 10.0);
        for &path in &game.solar().paths {
            assert!(!ctx.scene.get(path).unwrap().visible);
        }
        let state = ctx.events[0];
        assert_eq!((state.a, state.b, state.c), (0.0, 0.0, 10.0));
    }

    #[test]
    fn hidden_paths_are_not_rendered() {
        let (mut game, mut ctx) = ready("");
        let mut buf = RenderBuffer::new();
        build_render_buffer(&ctx.scene, &ctx.textures, &mut buf);
        assert_eq!(buf.line_vertex_count(), 9 * 200);
        let visible_meshes = buf.mesh_count();

        let mut input = InputQueue::new();
        input.push(option(OPTION_SHOW_PATH, 0.0));
        tick(&mut game, &mut ctx, &input, 16.0);
        build_render_buffer(&ctx.scene, &ctx.textures, &mut buf);
        assert_eq!(buf.line_vertex_count(), 0);
        assert_eq!(buf.mesh_count(), visible_meshes);
    }

    #[test]
    fn render_buffer_has_one_instance_per_mesh() {
        let (_, ctx) = ready("");
        let meshes = ctx.scene.iter().filter(|n| n.mesh_component().is_some()).count();
        let mut buf = RenderBuffer::new();
        build_render_buffer(&ctx.scene, &ctx.textures, &mut buf);
        assert_eq!(buf.mesh_count() as usize, meshes);
    }

    #[test]
    fn click_on_earth_navigates_and_miss_does_not() {
        let (mut game, mut ctx) = ready("");
        let earth = ctx.scene.world_matrix(game.solar().bodies[EARTH].mesh).unwrap().w_axis.truncate();
        let ndc = ctx.camera.project(earth);
        let px = Vec2::new(
            (ndc.x + 1.0) * 0.5 * ctx.viewport.width,
            (1.0 - ndc.y) * 0.5 * ctx.viewport.height,
        );

        let mut miss = InputQueue::new();
        miss.push(InputEvent::Click { x: 2.0, y: 2.0 });
        tick(&mut game, &mut ctx, &miss, 16.0);
        assert!(ctx.take_navigation().is_none());

        // Earth has barely moved after one tick; the click still lands on it
        let mut hit = InputQueue::new();
        hit.push(InputEvent::Click { x: px.x, y: px.y });
        tick(&mut game, &mut ctx, &hit, 32.0);
        assert_eq!(ctx.take_navigation().as_deref(), Some("https://science.nasa.gov/earth/facts/"));
    }

    #[test]
    fn frame_loop_drives_until_stopped() {
        let (mut game, mut ctx) = ready("");
        let pivot = game.solar().bodies[EARTH].pivot;
        let input = InputQueue::new();

        let ticks = std::cell::Cell::new(0u32);
        let mut frame_loop = FrameLoop::new(1000.0 / 60.0, |t| {
            tick(&mut game, &mut ctx, &input, t);
            ticks.set(ticks.get() + 1);
        });
        let stop = frame_loop.stop_handle();
        assert_eq!(frame_loop.run_for(30), 30);
        stop.stop();
        assert_eq!(frame_loop.run_for(30), 0);
        drop(frame_loop);

        assert_eq!(ticks.get(), 30);
        assert_ne!(ctx.scene.get(pivot).unwrap().rotation, glam::Quat::IDENTITY);
    }
}
