//! Player configuration
//!
//! The source URL is supplied explicitly when a widget is mounted. An
//! empty or missing value becomes `None` rather than a blank string.

use serde::{Deserialize, Serialize};

use crate::utils::data_url::{validate_midi_data_url, DataUrlError};

/// Which source URLs the widget accepts
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SourcePolicy {
    /// Any non-empty URL is handed to the audio engine unchanged
    #[default]
    Any,
    /// Only inline `data:audio/midi;base64,` URLs
    MidiDataUrl,
}

/// A validated, non-empty audio/MIDI source URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUrl(String);

impl SourceUrl {
    /// Trim `raw` and check it against `policy`.
    ///
    /// Returns `Ok(None)` for an empty value; policy violations are errors.
    pub fn parse(raw: &str, policy: SourcePolicy) -> Result<Option<Self>, DataUrlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if policy == SourcePolicy::MidiDataUrl {
            validate_midi_data_url(trimmed)?;
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for log lines; data URLs can be megabytes long
    pub fn summary(&self) -> String {
        const MAX: usize = 48;
        if self.0.chars().count() <= MAX {
            self.0.clone()
        } else {
            let head: String = self.0.chars().take(MAX).collect();
            format!("{}... ({} bytes)", head, self.0.len())
        }
    }
}

/// Configuration read once at initialization
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerConfig {
    pub source: Option<SourceUrl>,
}

impl PlayerConfig {
    pub fn new(source: Option<SourceUrl>) -> Self {
        Self { source }
    }

    /// Build from a possibly-missing raw string
    pub fn from_raw(raw: Option<&str>, policy: SourcePolicy) -> Result<Self, DataUrlError> {
        let source = match raw {
            Some(value) => SourceUrl::parse(value, policy)?,
            None => None,
        };
        Ok(Self { source })
    }
}

/// Presentation options for a mounted widget
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetOptions {
    pub play_label: String,
    pub pause_label: String,
    pub source_policy: SourcePolicy,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            play_label: "Play".to_string(),
            pause_label: "Pause".to_string(),
            source_policy: SourcePolicy::Any,
        }
    }
}
