//! Typing Trainer core crate.
//!
//! A word appears, the player types it, points and streaks pile up. The
//! scoring / word-progression state machine lives in [`engine`] and has no
//! browser dependencies, so it is tested natively. [`web`] is the DOM front
//! end exposed through `start_game()`. First-time players get an on-screen
//! keyboard with finger hints driven by the static map in [`keyboard`].

use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod input;
pub mod keyboard;
pub mod level;
pub mod library;
mod logging;
pub mod rng;
pub mod scoring;
mod web;

pub use config::EngineConfig;
pub use engine::{
    AdvanceCause, GameEngine, GameEvent, GameState, LetterState, PendingAdvance, Snapshot, Status,
    StatusKind,
};
pub use input::KeyInput;
pub use keyboard::{Finger, KeyHint};
pub use level::{Level, ParseLevelError};
pub use library::WordLibrary;
pub use rng::{RandomPicker, ScriptedPicker, WordPicker};
pub use scoring::points_for_word;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::mount(GameEngine::new())
}

/// Same as `start_game` with tuning from the page, e.g.
/// `{"success_delay_ms": 1000}`. Missing fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config =
        EngineConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    web::mount(GameEngine::with_config(config))
}

/// Level names the page may offer, in menu order.
#[wasm_bindgen]
pub fn level_names() -> Vec<String> {
    Level::ALL.iter().map(|l| l.name().to_string()).collect()
}

/// Switches level by name, for pages that render their own level menu.
/// Unknown names are logged and ignored.
#[wasm_bindgen]
pub fn set_level(name: &str) {
    web::select_level(name);
}
