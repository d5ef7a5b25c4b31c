//! Widget markup
//!
//! The widget replaces the mount point's contents with:
//!
//! ```html
//! <div id="{mount}-midi-player" class="midi-player">
//!   <button id="{mount}-play-button" class="midi-player-play">Play</button>
//!   <button id="{mount}-pause-button" class="midi-player-pause" disabled>Pause</button>
//! </div>
//! ```
//!
//! Element ids are prefixed with the mount id so several widgets can share
//! a page.

use crate::models::{ButtonStates, PlaybackState, WidgetOptions};
use crate::utils::escape_html;

/// Text shown when no source URL was configured
pub const MISSING_SOURCE_MESSAGE: &str = "Error: No MIDI file provided.";

pub const ERROR_CLASS: &str = "midi-player-error";

/// Element ids of one mounted widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetIds {
    pub mount: String,
    pub container: String,
    pub play: String,
    pub pause: String,
}

impl WidgetIds {
    pub fn for_mount(mount_id: &str) -> Self {
        Self {
            mount: mount_id.to_string(),
            container: format!("{}-midi-player", mount_id),
            play: format!("{}-play-button", mount_id),
            pause: format!("{}-pause-button", mount_id),
        }
    }
}

fn disabled_attr(enabled: bool) -> &'static str {
    if enabled {
        ""
    } else {
        " disabled"
    }
}

/// Markup for the two buttons in the initial `Paused` state
pub fn render_widget(ids: &WidgetIds, options: &WidgetOptions) -> String {
    render_widget_in_state(ids, options, PlaybackState::default().buttons())
}

pub fn render_widget_in_state(ids: &WidgetIds, options: &WidgetOptions, buttons: ButtonStates) -> String {
    format!(
        concat!(
            "<div id=\"{container}\" class=\"midi-player\">",
            "<button id=\"{play}\" class=\"midi-player-play\"{play_disabled}>{play_label}</button>",
            "<button id=\"{pause}\" class=\"midi-player-pause\"{pause_disabled}>{pause_label}</button>",
            "</div>"
        ),
        container = escape_html(&ids.container),
        play = escape_html(&ids.play),
        pause = escape_html(&ids.pause),
        play_disabled = disabled_attr(buttons.play_enabled),
        pause_disabled = disabled_attr(buttons.pause_enabled),
        play_label = escape_html(&options.play_label),
        pause_label = escape_html(&options.pause_label),
    )
}

/// Paragraph appended to the mount point for a user-visible error
pub fn render_error(message: &str) -> String {
    format!("<p class=\"{}\">{}</p>", ERROR_CLASS, escape_html(message))
}
