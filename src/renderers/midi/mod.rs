//! Alignment-to-MIDI rendering
//!
//! Converts an aligned set of protein sequences into a multi-track Standard
//! MIDI File: one track per record, one note per residue, gaps as rests.
//!
//! # Usage
//! ```rust,ignore
//! use crate::renderers::midi::{render_alignment_midi, RenderOptions};
//!
//! let bytes = render_alignment_midi(fasta_text, &RenderOptions::default())?;
//! ```

pub mod converter;
pub mod defaults;
pub mod model;
pub mod options;
pub mod write;

pub use converter::alignment_to_score;
pub use defaults::{DEFAULT_TEMPO_BPM, DEFAULT_TIME_STEP, DEFAULT_TPQ, DEFAULT_VELOCITY};
pub use model::{Note, Part, Score};
pub use options::RenderOptions;
pub use write::write_smf;

use thiserror::Error;

use crate::parse::{parse_alignment, FastaError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MidiRenderError {
    #[error("alignment parse error: {0}")]
    Fasta(#[from] FastaError),

    #[error("invalid render option: {0}")]
    InvalidOption(String),

    #[error("alignment too long for MIDI: {ticks} ticks")]
    TooLong { ticks: u64 },

    #[error("midi write error: {0}")]
    Write(String),
}

/// Parse aligned FASTA text and render it to SMF bytes
pub fn render_alignment_midi(fasta: &str, options: &RenderOptions) -> Result<Vec<u8>, MidiRenderError> {
    let records = parse_alignment(fasta)?;
    let score = alignment_to_score(&records, options)?;
    log::debug!(
        "Rendering {} parts, {} notes, {} ticks",
        score.parts.len(),
        score.note_count(),
        score.end_tick()
    );

    let mut out = Vec::new();
    write_smf(&score, &mut out)?;
    Ok(out)
}
