//! Parsers for sequence input
//!
//! Only aligned FASTA is needed: each record becomes one voice of the
//! rendered MIDI file.

pub mod fasta;

pub use fasta::{parse_alignment, parse_fasta, AlignedRecord, FastaError, GAP};
