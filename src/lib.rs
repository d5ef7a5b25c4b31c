//! MIDI Player WASM Module
//!
//! A Play/Pause widget that toggles playback of one audio/MIDI source
//! through an external audio engine, plus a renderer that turns aligned
//! protein sequences into multi-track MIDI for the widget to play.

pub mod api;
pub mod engine;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod utils;
pub mod widget;

// Re-export commonly used types
pub use engine::{AudioEngine, AudioPlayer, EngineError};
pub use models::{ButtonStates, PlaybackState, PlayerConfig, SourcePolicy, SourceUrl, WidgetOptions};
pub use widget::{PauseOutcome, PlayOutcome, PlayerController, PlayerError, WidgetView};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    log::info!("MIDI player WASM module initialized");
}
