//! Lean score representation written out as a Standard MIDI File
//!
//! Just enough structure for alignment rendering: one tempo map and one
//! part per aligned record.

#[derive(Debug, Clone)]
pub struct Score {
    pub tpq: u16,           // Ticks per quarter note
    pub tempo_bpm: f64,     // Single tempo for the whole piece
    pub parts: Vec<Part>,   // One per aligned record
}

#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub channel: u8,        // MIDI channel 0-15 (9 = drums)
    pub program: u8,        // MIDI program 0-127 (GM instrument)
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub start_tick: u64,
    pub dur_tick: u64,
    pub pitch: u8,          // MIDI note number 0-127
    pub vel: u8,            // Velocity 1-127
}

impl Score {
    /// Last tick reached by any note
    pub fn end_tick(&self) -> u64 {
        self.parts
            .iter()
            .flat_map(|part| part.notes.iter())
            .map(|note| note.start_tick + note.dur_tick)
            .max()
            .unwrap_or(0)
    }

    pub fn note_count(&self) -> usize {
        self.parts.iter().map(|part| part.notes.len()).sum()
    }
}

/// Convert seconds to MIDI ticks at a fixed tempo
///
/// ticks = seconds * (bpm / 60) * tpq, rounded to the nearest tick
pub fn seconds_to_ticks(seconds: f64, tempo_bpm: f64, tpq: u16) -> u64 {
    (seconds * tempo_bpm / 60.0 * tpq as f64).round() as u64
}
