//! Engine selected at mount time
//!
//! Mounted widgets live in one registry, so the two browser engines are
//! folded into a single type.

use super::{AudioEngine, AudioPlayer, EngineError, ScriptedEngine, ScriptedPlayer, ToneEngine, TonePlayer};
use crate::models::SourceUrl;

#[derive(Debug, Clone)]
pub enum BrowserEngine {
    Tone(ToneEngine),
    Scripted(ScriptedEngine),
}

pub enum BrowserPlayer {
    Tone(TonePlayer),
    Scripted(ScriptedPlayer),
}

impl BrowserEngine {
    pub fn name(&self) -> &'static str {
        match self {
            BrowserEngine::Tone(_) => "tone",
            BrowserEngine::Scripted(_) => "scripted",
        }
    }
}

impl AudioEngine for BrowserEngine {
    type Player = BrowserPlayer;

    fn create_player(&self, source: &SourceUrl) -> Result<BrowserPlayer, EngineError> {
        match self {
            BrowserEngine::Tone(engine) => engine.create_player(source).map(BrowserPlayer::Tone),
            BrowserEngine::Scripted(engine) => engine.create_player(source).map(BrowserPlayer::Scripted),
        }
    }

    async fn unlock(&self) -> Result<(), EngineError> {
        match self {
            BrowserEngine::Tone(engine) => engine.unlock().await,
            BrowserEngine::Scripted(engine) => engine.unlock().await,
        }
    }
}

impl AudioPlayer for BrowserPlayer {
    fn start(&mut self) -> Result<(), EngineError> {
        match self {
            BrowserPlayer::Tone(player) => player.start(),
            BrowserPlayer::Scripted(player) => player.start(),
        }
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        match self {
            BrowserPlayer::Tone(player) => player.stop(),
            BrowserPlayer::Scripted(player) => player.stop(),
        }
    }
}
