//! Audio engine seam
//!
//! Decoding and scheduling belong to an external audio library. The widget
//! only needs three capabilities from it: build a player bound to a source,
//! unlock the audio context after a user gesture, and start/stop a player.
//!
//! # Implementations
//!
//! - `tone`: the global `Tone` library loaded by the host page
//! - `scripted`: any host-supplied JS object with the same shape
//! - `browser`: runtime choice between the two for the mounted widgets

pub mod browser;
pub mod scripted;
pub mod tone;

use std::future::Future;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::SourceUrl;

pub use browser::{BrowserEngine, BrowserPlayer};
pub use scripted::{ScriptedEngine, ScriptedPlayer};
pub use tone::{TonePlayer, ToneEngine};

/// Failure reported by the audio collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract a readable message from a thrown JS value
    pub fn from_js(value: &JsValue) -> Self {
        if let Some(text) = value.as_string() {
            return Self::new(text);
        }
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return Self::new(String::from(error.message()));
        }
        Self::new(format!("{:?}", value))
    }
}

/// Factory and context control of an audio library
pub trait AudioEngine {
    type Player: AudioPlayer;

    /// Build a player bound to `source`, routed to the audio output
    fn create_player(&self, source: &SourceUrl) -> Result<Self::Player, EngineError>;

    /// Activate the audio context; must resolve before the first start
    fn unlock(&self) -> impl Future<Output = Result<(), EngineError>>;
}

/// A player instance owned by one widget
pub trait AudioPlayer {
    fn start(&mut self) -> Result<(), EngineError>;

    fn stop(&mut self) -> Result<(), EngineError>;
}
