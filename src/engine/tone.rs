//! Bindings to the Tone.js library
//!
//! The host page loads Tone.js as a global. If it is missing, constructing a
//! player throws a `ReferenceError`, which surfaces as a construction error.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{AudioEngine, AudioPlayer, EngineError};
use crate::models::SourceUrl;

#[wasm_bindgen(js_namespace = Tone)]
extern "C" {
    #[wasm_bindgen(js_name = Player)]
    type ToneJsPlayer;

    #[wasm_bindgen(constructor, js_class = "Player", catch)]
    fn new(url: &str) -> Result<ToneJsPlayer, JsValue>;

    #[wasm_bindgen(method, js_name = toDestination, catch)]
    fn to_destination(this: &ToneJsPlayer) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = start, catch)]
    fn start_playback(this: &ToneJsPlayer) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = stop, catch)]
    fn stop_playback(this: &ToneJsPlayer) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = start, catch)]
    fn tone_start() -> Result<js_sys::Promise, JsValue>;
}

/// Audio engine backed by the global `Tone` object
#[derive(Debug, Default, Clone, Copy)]
pub struct ToneEngine;

impl ToneEngine {
    pub fn new() -> Self {
        Self
    }
}

/// A `Tone.Player` connected to the destination node
pub struct TonePlayer {
    inner: ToneJsPlayer,
}

impl AudioEngine for ToneEngine {
    type Player = TonePlayer;

    fn create_player(&self, source: &SourceUrl) -> Result<TonePlayer, EngineError> {
        let inner = ToneJsPlayer::new(source.as_str()).map_err(|e| EngineError::from_js(&e))?;
        inner
            .to_destination()
            .map_err(|e| EngineError::from_js(&e))?;
        Ok(TonePlayer { inner })
    }

    async fn unlock(&self) -> Result<(), EngineError> {
        let promise = tone_start().map_err(|e| EngineError::from_js(&e))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| EngineError::from_js(&e))
    }
}

impl AudioPlayer for TonePlayer {
    fn start(&mut self) -> Result<(), EngineError> {
        self.inner
            .start_playback()
            .map(|_| ())
            .map_err(|e| EngineError::from_js(&e))
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.inner
            .stop_playback()
            .map(|_| ())
            .map_err(|e| EngineError::from_js(&e))
    }
}
