//! Canyon Runner core crate.
//!
//! A ship flies up a procedurally generated canyon that scrolls past it; arrow keys
//! steer, the score ticks up every 10ms, and touching a wall ends the run. The game
//! logic (`canyon`, `ship`, `input`, `game`) is plain Rust drawing through the
//! [`surface::DrawSurface`] trait and drawing randomness from [`rng::RandomSource`],
//! so it runs headless in tests. `web` wires it to a canvas, a timer and the keyboard.

use wasm_bindgen::prelude::*;

pub mod canyon;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod rng;
pub mod ship;
pub mod surface;
mod web;

pub use canyon::{CanyonTrack, Segment, Veering};
pub use config::{GameConfig, ShipGeometry};
pub use error::GameError;
pub use game::{Game, GameState, TickOutcome};
pub use input::{Arrow, Controls, Offset};
pub use rng::{RandomSource, SeededRandom};
pub use ship::{Ship, ShipBounds};
pub use surface::DrawSurface;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Starts a run with the classic settings on `<canvas id="screen">`.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())?;
    Ok(())
}

/// Starts a run with settings from a JSON object; omitted fields use the defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    web::start(config)?;
    Ok(())
}

#[wasm_bindgen]
pub fn current_score() -> u32 {
    web::current_score()
}
