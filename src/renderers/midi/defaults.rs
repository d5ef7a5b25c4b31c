//! Default values for MIDI rendering
//!
//! Provides the residue pitch table, the species instrument table and the
//! timing defaults.

use std::collections::BTreeMap;

/// Default tempo in beats per minute
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Default duration of one alignment column, in seconds
pub const DEFAULT_TIME_STEP: f64 = 0.5;

/// Default MIDI velocity (1-127)
pub const DEFAULT_VELOCITY: u8 = 100;

/// Default MIDI program (0 = Acoustic Grand Piano in General MIDI)
pub const DEFAULT_PROGRAM: u8 = 0;

/// Pitch for residues missing from the table (middle C)
pub const DEFAULT_PITCH: u8 = 60;

/// Default ticks per quarter note (MIDI resolution)
pub const DEFAULT_TPQ: u16 = 480;

/// Largest tempo value a Set Tempo meta event can hold (24 bits)
pub const MAX_MICROS_PER_QUARTER: u32 = 0xFF_FFFF;

/// Amino acid one-letter codes in pitch order, starting at middle C
const RESIDUE_ORDER: [char; 20] = [
    'A', 'V', 'I', 'L', 'M', 'S', 'T', 'N', 'Q', 'Y',
    'D', 'E', 'K', 'R', 'H', 'F', 'W', 'C', 'G', 'P',
];

/// MIDI pitch for an amino acid residue (A=60 ... P=79)
pub fn residue_pitch(residue: char) -> u8 {
    RESIDUE_ORDER
        .iter()
        .position(|&r| r == residue.to_ascii_uppercase())
        .map(|offset| DEFAULT_PITCH + offset as u8)
        .unwrap_or(DEFAULT_PITCH)
}

/// General MIDI program per species
pub fn default_instruments() -> BTreeMap<String, u8> {
    [
        ("Homo sapiens", 0),               // Grand Piano
        ("Mus musculus", 40),              // Violin
        ("Canis lupus familiaris", 24),    // Acoustic Guitar (nylon)
        ("Gallus gallus", 68),             // Oboe
        ("Xenopus tropicalis", 12),        // Marimba
        ("Danio rerio", 11),               // Vibraphone
        ("Anolis carolinensis", 73),       // Flute
        ("Drosophila melanogaster", 71),   // Clarinet
        ("Caenorhabditis elegans", 114),   // Steel Drums
        ("Saccharomyces cerevisiae", 21),  // Accordion
    ]
    .into_iter()
    .map(|(species, program)| (species.to_string(), program))
    .collect()
}

/// Melodic channels: every channel except 9 (10 in 1-indexed), the drum kit
const MELODIC_CHANNELS: [u8; 15] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15];

/// Assign MIDI channel from track index, cycling through the melodic channels
pub fn assign_channel(track_index: usize) -> u8 {
    MELODIC_CHANNELS[track_index % MELODIC_CHANNELS.len()]
}
