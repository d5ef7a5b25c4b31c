//! Error types for the player widget

use thiserror::Error;

use crate::engine::EngineError;
use crate::utils::data_url::DataUrlError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// No source URL was configured; the widget stays inert
    #[error("No MIDI file URL provided")]
    MissingSource,

    /// The source URL was rejected by the configured policy
    #[error(transparent)]
    InvalidSource(#[from] DataUrlError),

    #[error("Error creating player: {0}")]
    Construction(EngineError),

    #[error("Audio context unlock failed: {0}")]
    Unlock(EngineError),

    #[error("Playback start failed: {0}")]
    Start(EngineError),

    #[error("Playback stop failed: {0}")]
    Stop(EngineError),

    /// The mount point is missing or the widget markup could not be built
    #[error("Mount failed: {0}")]
    Mount(String),
}
