//! DOM-backed widget view

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

use super::errors::PlayerError;
use super::markup::{render_error, render_widget, WidgetIds};
use super::WidgetView;
use crate::models::{ButtonStates, WidgetOptions};

/// The two buttons inside a mount point
pub struct DomView {
    mount: Element,
    play: HtmlButtonElement,
    pause: HtmlButtonElement,
}

fn find_button(document: &Document, id: &str) -> Result<HtmlButtonElement, PlayerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlayerError::Mount(format!("button #{} not found after render", id)))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| PlayerError::Mount(format!("#{} is not a button", id)))
}

impl DomView {
    /// Replace the contents of the mount element with the widget markup
    pub fn mount(document: &Document, ids: &WidgetIds, options: &WidgetOptions) -> Result<Self, PlayerError> {
        let mount = document
            .get_element_by_id(&ids.mount)
            .ok_or_else(|| PlayerError::Mount(format!("mount element #{} not found", ids.mount)))?;

        mount.set_inner_html(&render_widget(ids, options));

        Ok(Self {
            play: find_button(document, &ids.play)?,
            pause: find_button(document, &ids.pause)?,
            mount,
        })
    }

    pub fn mount_element(&self) -> &Element {
        &self.mount
    }

    pub fn play_button(&self) -> &HtmlButtonElement {
        &self.play
    }

    pub fn pause_button(&self) -> &HtmlButtonElement {
        &self.pause
    }

    /// Empty the mount element
    pub fn clear(&self) {
        self.mount.set_inner_html("");
    }
}

impl WidgetView for DomView {
    fn set_buttons(&mut self, buttons: ButtonStates) {
        self.play.set_disabled(!buttons.play_enabled);
        self.pause.set_disabled(!buttons.pause_enabled);
    }

    fn show_error(&mut self, message: &str) {
        if let Err(e) = self.mount.insert_adjacent_html("beforeend", &render_error(message)) {
            log::error!("Could not render error message: {:?}", e);
        }
    }
}
