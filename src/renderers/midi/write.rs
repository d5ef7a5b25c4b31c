use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind};

use super::defaults::MAX_MICROS_PER_QUARTER;
use super::model::{Part, Score};
use super::MidiRenderError;

/// Largest tick a MIDI variable-length quantity can hold
const MAX_TICK: u64 = 0x0FFF_FFFF;

/// Write a score as a Standard MIDI File (SMF) Format 1
pub fn write_smf(score: &Score, out: &mut Vec<u8>) -> Result<(), MidiRenderError> {
    let end_tick = score.end_tick();
    if end_tick > MAX_TICK {
        return Err(MidiRenderError::TooLong { ticks: end_tick });
    }

    let mut tracks = Vec::with_capacity(score.parts.len() + 1);

    // Track 0: tempo map
    tracks.push(build_conductor_track(score));

    // Tracks 1+: one per part
    for part in &score.parts {
        tracks.push(build_part_track(part));
    }

    let smf = Smf {
        header: Header {
            format: Format::Parallel,
            timing: Timing::Metrical(score.tpq.into()),
        },
        tracks,
    };

    smf.write(out)
        .map_err(|e| MidiRenderError::Write(format!("Failed to write MIDI: {}", e)))
}

fn build_conductor_track<'a>(score: &Score) -> Track<'a> {
    let microseconds_per_quarter = (60_000_000.0 / score.tempo_bpm).round() as u32;
    vec![
        TrackEvent {
            delta: 0.into(),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(microseconds_per_quarter.min(MAX_MICROS_PER_QUARTER).into())),
        },
        TrackEvent {
            delta: 0.into(),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        },
    ]
}

fn build_part_track(part: &Part) -> Track<'_> {
    let mut events = Vec::with_capacity(part.notes.len() * 2 + 3);

    // Track name
    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(part.name.as_bytes())),
    });

    // Program change (instrument)
    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Midi {
            channel: part.channel.into(),
            message: MidiMessage::ProgramChange {
                program: part.program.into(),
            },
        },
    });

    // Note events, with absolute ticks in `delta` until converted below
    for note in &part.notes {
        events.push(TrackEvent {
            delta: (note.start_tick as u32).into(),
            kind: TrackEventKind::Midi {
                channel: part.channel.into(),
                message: MidiMessage::NoteOn {
                    key: note.pitch.into(),
                    vel: note.vel.into(),
                },
            },
        });

        events.push(TrackEvent {
            delta: ((note.start_tick + note.dur_tick) as u32).into(),
            kind: TrackEventKind::Midi {
                channel: part.channel.into(),
                message: MidiMessage::NoteOff {
                    key: note.pitch.into(),
                    vel: 0.into(),
                },
            },
        });
    }

    // Stable sort keeps a note-off ahead of the next note-on at the same tick
    events.sort_by_key(|e| e.delta.as_int());

    convert_to_delta_times(&mut events);

    events.push(TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    events
}

/// Convert absolute tick times to delta times (time since previous event)
fn convert_to_delta_times(events: &mut [TrackEvent]) {
    let mut prev_tick = 0u32;
    for event in events.iter_mut() {
        let current_tick = event.delta.as_int();
        event.delta = current_tick.saturating_sub(prev_tick).into();
        prev_tick = current_tick;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::midi::model::Note;

    fn one_part_score(notes: Vec<Note>) -> Score {
        Score {
            tpq: 480,
            tempo_bpm: 120.0,
            parts: vec![Part {
                name: "Homo Sapiens".to_string(),
                channel: 0,
                program: 0,
                notes,
            }],
        }
    }

    #[test]
    fn test_write_minimal_smf() {
        let score = one_part_score(vec![Note { start_tick: 0, dur_tick: 480, pitch: 60, vel: 100 }]);

        let mut out = Vec::new();
        write_smf(&score, &mut out).expect("Failed to write SMF");

        assert_eq!(&out[0..4], b"MThd");
        // Format 1 with conductor + one part
        assert_eq!(&out[8..12], &[0x00, 0x01, 0x00, 0x02]);
    }

    #[test]
    fn test_delta_time_conversion() {
        let mut events = vec![
            TrackEvent {
                delta: 0.into(),
                kind: TrackEventKind::Meta(MetaMessage::TrackName(b"Test")),
            },
            TrackEvent {
                delta: 100.into(),
                kind: TrackEventKind::Midi {
                    channel: 0.into(),
                    message: MidiMessage::NoteOn { key: 60.into(), vel: 64.into() },
                },
            },
            TrackEvent {
                delta: 200.into(),
                kind: TrackEventKind::Midi {
                    channel: 0.into(),
                    message: MidiMessage::NoteOff { key: 60.into(), vel: 0.into() },
                },
            },
        ];

        convert_to_delta_times(&mut events);

        assert_eq!(events[0].delta.as_int(), 0);
        assert_eq!(events[1].delta.as_int(), 100);
        assert_eq!(events[2].delta.as_int(), 100);
    }

    #[test]
    fn test_repeated_pitch_note_off_precedes_note_on() {
        let score = one_part_score(vec![
            Note { start_tick: 0, dur_tick: 480, pitch: 64, vel: 100 },
            Note { start_tick: 480, dur_tick: 480, pitch: 64, vel: 100 },
        ]);
        let track = build_part_track(&score.parts[0]);

        let kinds: Vec<&str> = track
            .iter()
            .filter_map(|e| match e.kind {
                TrackEventKind::Midi { message: MidiMessage::NoteOn { .. }, .. } => Some("on"),
                TrackEventKind::Midi { message: MidiMessage::NoteOff { .. }, .. } => Some("off"),
                _ => None,
            })
            .collect();
        assert_eq!(kinds, vec!["on", "off", "on", "off"]);
    }

    #[test]
    fn test_too_long_score_rejected() {
        let score = one_part_score(vec![Note { start_tick: MAX_TICK, dur_tick: 10, pitch: 60, vel: 100 }]);
        let mut out = Vec::new();
        assert!(matches!(write_smf(&score, &mut out), Err(MidiRenderError::TooLong { .. })));
    }
}
