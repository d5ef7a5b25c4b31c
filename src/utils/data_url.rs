//! MIDI data URLs
//!
//! Generated MIDI files are handed to the player as inline
//! `data:audio/midi;base64,...` URLs so no file has to be served.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Prefix every inline MIDI source carries
pub const MIDI_DATA_URL_PREFIX: &str = "data:audio/midi;base64,";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataUrlError {
    #[error("Invalid MIDI file URL: expected prefix 'data:audio/midi;base64,'")]
    WrongPrefix,

    #[error("Invalid MIDI file URL: empty payload")]
    EmptyPayload,

    #[error("Invalid MIDI file URL: {0}")]
    BadPayload(String),
}

/// Encode SMF bytes as a MIDI data URL
pub fn midi_data_url(bytes: &[u8]) -> String {
    let mut url = String::with_capacity(MIDI_DATA_URL_PREFIX.len() + bytes.len() * 4 / 3 + 4);
    url.push_str(MIDI_DATA_URL_PREFIX);
    STANDARD.encode_string(bytes, &mut url);
    url
}

/// Check that `url` is a MIDI data URL with a decodable payload.
///
/// Returns the decoded length so callers can log it.
pub fn validate_midi_data_url(url: &str) -> Result<usize, DataUrlError> {
    let payload = url
        .strip_prefix(MIDI_DATA_URL_PREFIX)
        .ok_or(DataUrlError::WrongPrefix)?;

    if payload.is_empty() {
        return Err(DataUrlError::EmptyPayload);
    }

    STANDARD
        .decode(payload)
        .map(|bytes| bytes.len())
        .map_err(|e| DataUrlError::BadPayload(e.to_string()))
}

/// Decode the payload of a MIDI data URL
pub fn decode_midi_data_url(url: &str) -> Result<Vec<u8>, DataUrlError> {
    let payload = url
        .strip_prefix(MIDI_DATA_URL_PREFIX)
        .ok_or(DataUrlError::WrongPrefix)?;
    if payload.is_empty() {
        return Err(DataUrlError::EmptyPayload);
    }
    STANDARD
        .decode(payload)
        .map_err(|e| DataUrlError::BadPayload(e.to_string()))
}
