use wasm_bindgen::prelude::*;

pub mod animation;
pub mod bodies;
pub mod builder;
pub mod drift;
pub mod game;
pub mod interaction;
pub mod options;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");
