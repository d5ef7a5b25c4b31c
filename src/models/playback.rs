//! Playback state and the button states derived from it

use serde::{Deserialize, Serialize};

/// Whether the widget believes audio is playing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    /// Enabled flags for the Play and Pause buttons.
    ///
    /// Exactly one of the two is enabled in every state.
    pub fn buttons(self) -> ButtonStates {
        match self {
            PlaybackState::Paused => ButtonStates {
                play_enabled: true,
                pause_enabled: false,
            },
            PlaybackState::Playing => ButtonStates {
                play_enabled: false,
                pause_enabled: true,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackState::Paused => "paused",
            PlaybackState::Playing => "playing",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStates {
    pub play_enabled: bool,
    pub pause_enabled: bool,
}
