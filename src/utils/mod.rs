//! Utility modules for the MIDI player
//!
//! Small helpers shared by the widget and the MIDI renderer.

pub mod data_url;
pub mod html;

// Re-export commonly used helpers
pub use data_url::{midi_data_url, validate_midi_data_url, DataUrlError, MIDI_DATA_URL_PREFIX};
pub use html::escape_html;
