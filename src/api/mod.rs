//! MIDI Player WASM API
//!
//! This module provides the JavaScript-facing API: mounting and unmounting
//! Play/Pause widgets, and rendering sequence alignments to MIDI.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, options deserialization, error conversion
//! - `player`: widget mounting, click wiring, state queries
//! - `export`: alignment-to-MIDI rendering and data URLs

pub mod helpers;
pub mod export;
pub mod player;

pub use export::{midi_data_url, render_alignment_data_url, render_alignment_midi_js};
pub use player::{mount_player, mount_player_from_global, mount_player_with_engine, player_state, unmount_player};
