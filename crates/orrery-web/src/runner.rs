use orrery_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer, CameraUniform,
    ProtocolLayout, QueryParams, TextureId, TextureManifest,
    build_render_buffer,
};
use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::renderer::{FrameData, Renderer};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-system`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera: CameraUniform,
    config: GameConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    initialized: bool,
    /// Last size handed to a `Renderer`.
    surface: (u32, u32),
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_meshes, config.max_line_vertices);
        let header = layout.header(ctx.viewport.width, ctx.viewport.height);

        Self {
            game,
            camera: ctx.camera.uniform(),
            ctx,
            input: InputQueue::new(),
            render_buffer,
            layout,
            config,
            header,
            initialized: false,
            surface: (0, 0),
        }
    }

    /// Page query string (`location.search`) the game reads during init.
    pub fn with_query(mut self, search: &str) -> Self {
        self.ctx.query = QueryParams::parse(search);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ctx.seed = seed;
        self
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("game already initialized");
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild();
        log::info!(
            "scene ready: {} nodes, {} meshes, {} textures",
            self.ctx.scene.len(),
            self.render_buffer.mesh_count(),
            self.ctx.textures.len(),
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display tick at host time `time_ms`: advance the clock, feed
    /// the camera controls, update the game and rebuild the render buffer.
    pub fn tick(&mut self, time_ms: f64) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();
        self.ctx.clock.advance(time_ms);

        self.ctx.apply_controls(&self.input);
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.rebuild();
    }

    fn rebuild(&mut self) {
        build_render_buffer(&self.ctx.scene, &self.ctx.textures, &mut self.render_buffer);

        // Allow game to add custom render commands
        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
            };
            self.game.render(&mut render_ctx);
        }

        if self.render_buffer.meshes.len() > self.layout.max_meshes {
            log::warn!("mesh capacity {} exceeded, truncating", self.layout.max_meshes);
            self.render_buffer.meshes.truncate(self.layout.max_meshes);
        }
        if self.render_buffer.lines.len() > self.layout.max_line_vertices {
            // Keep whole segments
            let max = self.layout.max_line_vertices & !1;
            self.render_buffer.lines.truncate(max);
        }
        self.ctx.events.truncate(self.layout.max_events);
        self.camera = self.ctx.camera.uniform();
    }

    /// Viewport Manager entry point: the host surface is now `width` x `height`.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.resize(width, height);
        self.header = self.layout.header(self.ctx.viewport.width, self.ctx.viewport.height);
        self.camera = self.ctx.camera.uniform();
    }

    /// Resolve texture paths. Returns false if the manifest could not be parsed;
    /// the scene then renders untextured.
    pub fn load_manifest(&mut self, json: &str) -> bool {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                let missing = self.ctx.textures.apply_manifest(&manifest);
                log::info!(
                    "texture manifest applied: {} textures, {} missing",
                    self.ctx.textures.len(),
                    missing
                );
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// The host failed to load texture `id`.
    pub fn texture_failed(&mut self, id: u32) {
        if let Err(e) = self.ctx.textures.mark_failed(TextureId(id)) {
            log::warn!("{}", e);
        }
    }

    pub fn texture_count(&self) -> u32 {
        self.ctx.textures.len() as u32
    }

    pub fn texture_path(&self, id: u32) -> Option<String> {
        self.ctx.textures.path(TextureId(id)).map(str::to_owned)
    }

    /// Navigation requested during the last tick, if any.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.ctx.take_navigation()
    }

    /// Hand the current frame to a Rust-side renderer.
    pub fn draw(&mut self, renderer: &mut impl Renderer) {
        let size = (
            self.ctx.viewport.width.round() as u32,
            self.ctx.viewport.height.round() as u32,
        );
        if size != self.surface {
            renderer.resize(size.0, size.1);
            self.surface = size;
        }
        let frame = FrameData {
            meshes: &self.render_buffer.meshes,
            lines: &self.render_buffer.lines,
            camera: self.camera,
            ambient: self.ctx.lights.ambient(),
            lights: self.ctx.lights.as_slice(),
            width: self.ctx.viewport.width,
            height: self.ctx.viewport.height,
        };
        renderer.draw(&frame);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ---- Pointer accessors for zero-copy reads from JS ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn meshes_ptr(&self) -> *const f32 {
        self.render_buffer.meshes_ptr()
    }

    pub fn mesh_count(&self) -> u32 {
        self.render_buffer.mesh_count()
    }

    pub fn lines_ptr(&self) -> *const f32 {
        self.render_buffer.lines_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.render_buffer.line_vertex_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ctx.lights.ambient().intensity
    }

    pub fn ambient_color(&self) -> [f32; 3] {
        self.ctx.lights.ambient().color
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.viewport.width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.viewport.height
    }

    pub fn max_meshes(&self) -> u32 {
        self.config.max_meshes as u32
    }
}
