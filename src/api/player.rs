//! WASM API for the Play/Pause widget
//!
//! Mounted widgets are kept in a thread-local registry keyed by mount id,
//! together with the click listeners that drive them, so a widget can be
//! unmounted and remounted.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement};

use super::helpers::{js_error, options_or_default};
use crate::engine::{BrowserEngine, ScriptedEngine, ToneEngine};
use crate::models::{PlayerConfig, WidgetOptions};
use crate::widget::{DomView, PlayerController, PlayerError, WidgetIds, WidgetView};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

/// Global the host page sets before mounting (`window.midi_file_url`)
pub const GLOBAL_SOURCE_KEY: &str = "midi_file_url";

type BrowserController = PlayerController<BrowserEngine, DomView>;

/// A registered mount point
enum MountedWidget {
    /// Buttons wired to a controller
    Wired(WiredWidget),
    /// Rendered with an error message and no listeners
    Inert(Element),
}

struct WiredWidget {
    controller: BrowserController,
    play_button: HtmlButtonElement,
    pause_button: HtmlButtonElement,
    play_listener: Closure<dyn FnMut()>,
    pause_listener: Closure<dyn FnMut()>,
}

impl MountedWidget {
    fn detach(self) {
        match self {
            MountedWidget::Wired(widget) => widget.detach(),
            MountedWidget::Inert(mount) => mount.set_inner_html(""),
        }
    }
}

impl WiredWidget {
    fn detach(self) {
        let _ = self
            .play_button
            .remove_event_listener_with_callback("click", self.play_listener.as_ref().unchecked_ref());
        let _ = self
            .pause_button
            .remove_event_listener_with_callback("click", self.pause_listener.as_ref().unchecked_ref());
        self.controller.shutdown();
        self.controller.with_view(|view| view.clear());
    }
}

thread_local! {
    static MOUNTED: RefCell<HashMap<String, MountedWidget>> = RefCell::new(HashMap::new());
}

fn register(mount_id: &str, widget: MountedWidget) {
    MOUNTED.with(|mounted| {
        mounted.borrow_mut().insert(mount_id.to_string(), widget);
    });
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| js_error("Mount failed", "no document available"))
}

fn listen(button: &HtmlButtonElement, listener: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    button
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|e| js_error("Could not attach click listener", format!("{:?}", e)))
}

/// Render the widget into `mount_id` and wire it to `engine`.
///
/// Returns `true` when the buttons are wired, `false` when no source was
/// configured (the error message is shown in the widget instead).
fn mount_with(
    mount_id: &str,
    raw_source: Option<String>,
    engine: BrowserEngine,
    options: JsValue,
) -> Result<bool, JsValue> {
    let options: WidgetOptions = options_or_default(options, "Invalid widget options")?;
    wasm_info!("Mounting player into #{} (engine: {})", mount_id, engine.name());

    // Remounting replaces the previous widget
    if unmount_player(mount_id) {
        wasm_log!("  Replaced existing widget in #{}", mount_id);
    }

    let document = document()?;
    let ids = WidgetIds::for_mount(mount_id);
    let mut view = DomView::mount(&document, &ids, &options).map_err(|e| js_error("Mount failed", e))?;
    let play_button = view.play_button().clone();
    let pause_button = view.pause_button().clone();

    let config = match PlayerConfig::from_raw(raw_source.as_deref(), options.source_policy) {
        Ok(config) => config,
        Err(e) => {
            let err = PlayerError::from(e);
            view.show_error(&err.to_string());
            register(mount_id, MountedWidget::Inert(view.mount_element().clone()));
            return Err(js_error("Mount failed", err));
        }
    };

    let controller = match PlayerController::initialize(&config, engine, view) {
        Ok(controller) => controller,
        Err(PlayerError::MissingSource) => {
            wasm_error!("No MIDI file URL provided for #{}", mount_id);
            if let Some(mount) = document.get_element_by_id(mount_id) {
                register(mount_id, MountedWidget::Inert(mount));
            }
            return Ok(false);
        }
        Err(e) => return Err(js_error("Mount failed", e)),
    };

    let play_controller = controller.clone();
    let play_listener = Closure::wrap(Box::new(move || {
        // Disables Play now; the unlock and start run on the microtask queue
        let pending = play_controller.play();
        spawn_local(async move {
            // Failures are logged by the controller and already reverted
            let _ = pending.await;
        });
    }) as Box<dyn FnMut()>);

    let pause_controller = controller.clone();
    let pause_listener = Closure::wrap(Box::new(move || {
        let _ = pause_controller.pause();
    }) as Box<dyn FnMut()>);

    listen(&play_button, &play_listener)?;
    listen(&pause_button, &pause_listener)?;

    if !controller.has_player() {
        wasm_warn!("Player for #{} could not be created; buttons are inert", mount_id);
    }

    register(
        mount_id,
        MountedWidget::Wired(WiredWidget {
            controller,
            play_button,
            pause_button,
            play_listener,
            pause_listener,
        }),
    );

    wasm_info!("Player mounted into #{}", mount_id);
    Ok(true)
}

/// Mount a player for `source_url` using the global Tone.js library
///
/// # Parameters
/// - `mount_id`: id of the container element; its contents are replaced
/// - `source_url`: audio/MIDI URL; empty or missing shows an error message
/// - `options`: optional `{ playLabel, pauseLabel, sourcePolicy }`
#[wasm_bindgen(js_name = mountPlayer)]
pub fn mount_player(mount_id: &str, source_url: Option<String>, options: JsValue) -> Result<bool, JsValue> {
    mount_with(mount_id, source_url, BrowserEngine::Tone(ToneEngine::new()), options)
}

/// Mount a player whose source is read from `window.midi_file_url`
#[wasm_bindgen(js_name = mountPlayerFromGlobal)]
pub fn mount_player_from_global(mount_id: &str, options: JsValue) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("Mount failed", "no window available"))?;
    let source = Reflect::get(&window, &JsValue::from_str(GLOBAL_SOURCE_KEY))
        .ok()
        .and_then(|value| value.as_string());
    mount_with(mount_id, source, BrowserEngine::Tone(ToneEngine::new()), options)
}

/// Mount a player backed by a host-supplied engine object
///
/// The engine needs `createPlayer(url)` returning `{ start(), stop() }` and
/// may provide `unlock()` returning a Promise.
#[wasm_bindgen(js_name = mountPlayerWithEngine)]
pub fn mount_player_with_engine(
    mount_id: &str,
    source_url: Option<String>,
    engine: JsValue,
    options: JsValue,
) -> Result<bool, JsValue> {
    let engine = ScriptedEngine::new(engine).map_err(|e| js_error("Invalid engine", e))?;
    mount_with(mount_id, source_url, BrowserEngine::Scripted(engine), options)
}

/// Stop and remove the widget in `mount_id`; returns whether one existed
#[wasm_bindgen(js_name = unmountPlayer)]
pub fn unmount_player(mount_id: &str) -> bool {
    let removed = MOUNTED.with(|mounted| mounted.borrow_mut().remove(mount_id));
    match removed {
        Some(widget) => {
            widget.detach();
            wasm_info!("Player unmounted from #{}", mount_id);
            true
        }
        None => false,
    }
}

/// `"paused"` or `"playing"` for a wired widget, `undefined` otherwise
#[wasm_bindgen(js_name = playerState)]
pub fn player_state(mount_id: &str) -> Option<String> {
    MOUNTED.with(|mounted| {
        mounted
            .borrow()
            .get(mount_id)
            .and_then(|widget| match widget {
                MountedWidget::Wired(widget) => Some(widget.controller.state().as_str().to_string()),
                MountedWidget::Inert(_) => None,
            })
    })
}
