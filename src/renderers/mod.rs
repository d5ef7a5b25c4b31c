//! Renderers module
//!
//! Turns parsed sequence data into playable output formats.

pub mod midi;

pub use midi::{render_alignment_midi, MidiRenderError, RenderOptions};
