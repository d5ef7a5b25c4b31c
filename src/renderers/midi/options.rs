//! Rendering options, deserialized from the JavaScript caller

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::{
    default_instruments, DEFAULT_PROGRAM, DEFAULT_TEMPO_BPM, DEFAULT_TIME_STEP, DEFAULT_TPQ, DEFAULT_VELOCITY,
    MAX_MICROS_PER_QUARTER,
};
use super::MidiRenderError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub tempo_bpm: f64,
    /// Seconds per alignment column
    pub time_step: f64,
    pub tpq: u16,
    pub velocity: u8,
    /// Species name → General MIDI program; lookups ignore case
    pub instruments: BTreeMap<String, u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tempo_bpm: DEFAULT_TEMPO_BPM,
            time_step: DEFAULT_TIME_STEP,
            tpq: DEFAULT_TPQ,
            velocity: DEFAULT_VELOCITY,
            instruments: default_instruments(),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), MidiRenderError> {
        if !(self.tempo_bpm.is_finite() && self.tempo_bpm > 0.0) {
            return Err(MidiRenderError::InvalidOption(format!(
                "tempo must be positive, got {}",
                self.tempo_bpm
            )));
        }
        if (60_000_000.0 / self.tempo_bpm).round() > MAX_MICROS_PER_QUARTER as f64 {
            return Err(MidiRenderError::InvalidOption(format!(
                "tempo {} BPM is too slow for a MIDI tempo event",
                self.tempo_bpm
            )));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(MidiRenderError::InvalidOption(format!(
                "time step must be positive, got {}",
                self.time_step
            )));
        }
        if self.tpq == 0 || self.tpq > 0x7FFF {
            return Err(MidiRenderError::InvalidOption(format!(
                "ticks per quarter must be in 1..=32767, got {}",
                self.tpq
            )));
        }
        if self.velocity == 0 || self.velocity > 127 {
            return Err(MidiRenderError::InvalidOption(format!(
                "velocity must be in 1..=127, got {}",
                self.velocity
            )));
        }
        if let Some((species, program)) = self.instruments.iter().find(|(_, &p)| p > 127) {
            return Err(MidiRenderError::InvalidOption(format!(
                "program {} for '{}' is out of range 0..=127",
                program, species
            )));
        }
        Ok(())
    }

    /// Program for `species`, falling back to the default piano
    pub fn program_for(&self, species: &str) -> u8 {
        self.instruments
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(species))
            .map(|(_, &program)| program)
            .unwrap_or(DEFAULT_PROGRAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RenderOptions::default().validate().is_ok());
    }

    #[test]
    fn test_program_lookup_ignores_case() {
        let options = RenderOptions::default();
        assert_eq!(options.program_for("Mus Musculus"), 40);
        assert_eq!(options.program_for("Homo Sapiens"), 0);
        assert_eq!(options.program_for("Unknown Species"), DEFAULT_PROGRAM);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let bad_tempo = RenderOptions { tempo_bpm: 0.0, ..RenderOptions::default() };
        assert!(matches!(bad_tempo.validate(), Err(MidiRenderError::InvalidOption(_))));

        let bad_step = RenderOptions { time_step: f64::NAN, ..RenderOptions::default() };
        assert!(bad_step.validate().is_err());

        let mut bad_program = RenderOptions::default();
        bad_program.instruments.insert("Danio rerio".to_string(), 200);
        assert!(bad_program.validate().is_err());
    }

    #[test]
    fn test_tempo_below_midi_range_rejected() {
        let too_slow = RenderOptions { tempo_bpm: 2.0, ..RenderOptions::default() };
        assert!(matches!(too_slow.validate(), Err(MidiRenderError::InvalidOption(_))));

        // 60e6 / 0xFFFFFF rounds to exactly the largest representable value
        let slowest = RenderOptions { tempo_bpm: 60_000_000.0 / MAX_MICROS_PER_QUARTER as f64, ..RenderOptions::default() };
        assert!(slowest.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"tempoBpm": 360, "timeStep": 0.1}"#).unwrap();
        assert_eq!(options.tempo_bpm, 360.0);
        assert_eq!(options.time_step, 0.1);
        assert_eq!(options.tpq, DEFAULT_TPQ);
        assert_eq!(options.instruments.len(), 10);
    }
}
