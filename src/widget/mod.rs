//! Play/Pause widget
//!
//! The controller owns the optional player handle and the playback state;
//! a `WidgetView` turns state changes into button updates. In the browser
//! the view is `DomView`; tests drive the controller with recording views.

pub mod controller;
pub mod dom;
pub mod errors;
pub mod markup;

use crate::models::ButtonStates;

pub use controller::{PauseOutcome, PlayOutcome, PlayerController};
pub use dom::DomView;
pub use errors::PlayerError;
pub use markup::{render_error, render_widget, WidgetIds, MISSING_SOURCE_MESSAGE};

/// Rendering surface the controller writes to
pub trait WidgetView {
    /// Apply the enabled flags of the Play and Pause buttons
    fn set_buttons(&mut self, buttons: ButtonStates);

    /// Show a user-visible error next to the buttons
    fn show_error(&mut self, message: &str);
}
