//! Alignment-to-score conversion
//!
//! Each aligned record becomes one part. Column `i` sounds from
//! `i * time_step` to `(i + 1) * time_step` seconds; gap columns are rests.

use crate::parse::{AlignedRecord, GAP};

use super::defaults::{assign_channel, residue_pitch};
use super::model::{seconds_to_ticks, Note, Part, Score};
use super::options::RenderOptions;
use super::MidiRenderError;

/// Convert aligned records to a score
pub fn alignment_to_score(records: &[AlignedRecord], options: &RenderOptions) -> Result<Score, MidiRenderError> {
    options.validate()?;

    let parts = records
        .iter()
        .enumerate()
        .map(|(index, record)| record_to_part(record, index, options))
        .collect();

    Ok(Score {
        tpq: options.tpq,
        tempo_bpm: options.tempo_bpm,
        parts,
    })
}

fn record_to_part(record: &AlignedRecord, index: usize, options: &RenderOptions) -> Part {
    let species = record.species_name();
    let tick_at = |column: usize| seconds_to_ticks(column as f64 * options.time_step, options.tempo_bpm, options.tpq);

    let notes = record
        .residues
        .chars()
        .enumerate()
        .filter(|&(_, residue)| residue != GAP)
        .map(|(column, residue)| {
            let start_tick = tick_at(column);
            Note {
                start_tick,
                dur_tick: tick_at(column + 1) - start_tick,
                pitch: residue_pitch(residue),
                vel: options.velocity,
            }
        })
        .collect();

    Part {
        program: options.program_for(&species),
        channel: assign_channel(index),
        name: species,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps_are_rests() {
        let records = vec![AlignedRecord::new("homo_sapiens", "A-V")];
        let score = alignment_to_score(&records, &RenderOptions::default()).unwrap();

        let notes = &score.parts[0].notes;
        assert_eq!(notes.len(), 2);
        // 0.5 s per column at 120 BPM = one quarter = 480 ticks
        assert_eq!(notes[0], Note { start_tick: 0, dur_tick: 480, pitch: 60, vel: 100 });
        assert_eq!(notes[1], Note { start_tick: 960, dur_tick: 480, pitch: 61, vel: 100 });
    }

    #[test]
    fn test_parts_get_species_instruments_and_channels() {
        let records: Vec<AlignedRecord> = (0..11)
            .map(|i| AlignedRecord::new(if i == 1 { "mus_musculus".to_string() } else { format!("sp_{}", i) }, "A"))
            .collect();
        let score = alignment_to_score(&records, &RenderOptions::default()).unwrap();

        assert_eq!(score.parts.len(), 11);
        assert_eq!(score.parts[1].name, "Mus Musculus");
        assert_eq!(score.parts[1].program, 40);
        assert_eq!(score.parts[0].program, 0);
        assert_eq!(score.parts[9].channel, 10, "drum channel is skipped");
    }

    #[test]
    fn test_many_parts_cycle_through_melodic_channels() {
        let records: Vec<AlignedRecord> = (0..17).map(|i| AlignedRecord::new(format!("sp_{}", i), "A")).collect();
        let score = alignment_to_score(&records, &RenderOptions::default()).unwrap();

        let channels: Vec<u8> = score.parts.iter().map(|p| p.channel).collect();
        assert_eq!(channels, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 14, 15, 0, 1]);
    }

    #[test]
    fn test_short_time_step_timing() {
        let options = RenderOptions {
            tempo_bpm: 360.0,
            time_step: 0.1,
            ..RenderOptions::default()
        };
        let score = alignment_to_score(&[AlignedRecord::new("x", "MMM")], &options).unwrap();
        let starts: Vec<u64> = score.parts[0].notes.iter().map(|n| n.start_tick).collect();
        // 0.1 s at 360 BPM = 0.6 quarter = 288 ticks
        assert_eq!(starts, vec![0, 288, 576]);
        assert!(score.parts[0].notes.iter().all(|n| n.pitch == 64));
    }

    #[test]
    fn test_invalid_options_fail() {
        let options = RenderOptions { velocity: 0, ..RenderOptions::default() };
        assert!(alignment_to_score(&[AlignedRecord::new("x", "A")], &options).is_err());
    }
}
