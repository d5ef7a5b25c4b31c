//! WASM API for rendering alignments to MIDI

use wasm_bindgen::prelude::*;

use super::helpers::{js_error, options_or_default};
use crate::renderers::midi::{render_alignment_midi, RenderOptions};
use crate::utils::data_url;
use crate::{wasm_info, wasm_log};

fn render(fasta: &str, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options: RenderOptions = options_or_default(options, "Invalid render options")?;
    wasm_log!(
        "  tempo={} BPM, step={} s, tpq={}",
        options.tempo_bpm,
        options.time_step,
        options.tpq
    );
    render_alignment_midi(fasta, &options).map_err(|e| js_error("MIDI rendering error", e))
}

/// Render aligned FASTA text to a Standard MIDI File
///
/// # Parameters
/// - `fasta`: aligned sequences, one record per species
/// - `options`: optional `{ tempoBpm, timeStep, tpq, velocity, instruments }`
///
/// # Returns
/// MIDI file bytes
#[wasm_bindgen(js_name = renderAlignmentMidi)]
pub fn render_alignment_midi_js(fasta: &str, options: JsValue) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("renderAlignmentMidi called ({} bytes of FASTA)", fasta.len());
    let midi_bytes = render(fasta, options)?;

    let uint8_array = js_sys::Uint8Array::new_with_length(midi_bytes.len() as u32);
    uint8_array.copy_from(&midi_bytes);

    wasm_info!("  MIDI generated: {} bytes", midi_bytes.len());
    Ok(uint8_array)
}

/// Render aligned FASTA text straight to a `data:audio/midi;base64,` URL,
/// ready to pass to `mountPlayer`
#[wasm_bindgen(js_name = renderAlignmentDataUrl)]
pub fn render_alignment_data_url(fasta: &str, options: JsValue) -> Result<String, JsValue> {
    wasm_info!("renderAlignmentDataUrl called ({} bytes of FASTA)", fasta.len());
    let midi_bytes = render(fasta, options)?;
    Ok(data_url::midi_data_url(&midi_bytes))
}

/// Encode MIDI bytes as a data URL
#[wasm_bindgen(js_name = midiDataUrl)]
pub fn midi_data_url(bytes: &[u8]) -> String {
    data_url::midi_data_url(bytes)
}
