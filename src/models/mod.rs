//! Models module for the MIDI player
//!
//! Configuration values and the playback state machine shared by the
//! widget controller and the JavaScript API.

pub mod config;
pub mod playback;

// Re-export commonly used types
pub use config::{PlayerConfig, SourcePolicy, SourceUrl, WidgetOptions};
pub use playback::{ButtonStates, PlaybackState};
