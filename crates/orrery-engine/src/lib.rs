pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{NodeId, TextureId, GameEvent};
pub use components::node::{SceneNode, NodeKind};
pub use components::mesh::{MeshComponent, Geometry, Material, Shading, Side, Color, LineLoop};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use core::scheduler::{FrameLoop, StopHandle};
pub use core::rng::Rng;
pub use renderer::instance::{MeshInstance, LineVertex, RenderBuffer};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use renderer::controls::OrbitControls;
pub use renderer::viewport::Viewport;
pub use input::queue::{InputEvent, InputQueue};
pub use input::query::QueryParams;
pub use assets::manifest::TextureManifest;
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{PointLight, AmbientLight, LightState};
pub use systems::picking::{Ray, PickHit, pick_nearest};
pub use systems::render::build_render_buffer;
pub use error::{OrreryError, Result};
