//! Browser tests for the mounted widget
//!
//! Run with `wasm-pack test --headless --chrome`. The engine is a scripted
//! JS object that records calls, so Tone.js is not needed.

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use midi_player_wasm::api::{mount_player, mount_player_with_engine, player_state, unmount_player};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_mount(id: &str) {
    let doc = document();
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let div = doc.create_element("div").unwrap();
    div.set_id(id);
    doc.body().unwrap().append_child(&div).unwrap();
}

fn button(id: &str) -> HtmlButtonElement {
    document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

/// Engine object that counts calls in `engine.calls`
fn recording_engine(fail_create: bool) -> JsValue {
    let factory = Function::new_with_args(
        "failCreate",
        r#"
        const calls = { created: 0, unlocks: 0, starts: 0, stops: 0 };
        return {
            calls,
            createPlayer(url) {
                if (failCreate) { throw new Error("cannot load " + url); }
                calls.created += 1;
                return { start() { calls.starts += 1; }, stop() { calls.stops += 1; } };
            },
            unlock() { calls.unlocks += 1; return Promise.resolve(); },
        };
        "#,
    );
    factory.call1(&JsValue::NULL, &JsValue::from_bool(fail_create)).unwrap()
}

fn calls(engine: &JsValue, name: &str) -> f64 {
    let calls = Reflect::get(engine, &"calls".into()).unwrap();
    Reflect::get(&calls, &name.into()).unwrap().as_f64().unwrap()
}

/// Wait for a macrotask so every queued microtask has run
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_missing_source_renders_error() {
    fresh_mount("missing-source");
    let engine = recording_engine(false);

    let wired = mount_player_with_engine("missing-source", None, engine.clone(), JsValue::UNDEFINED).unwrap();

    assert!(!wired);
    let html = document().get_element_by_id("missing-source").unwrap().inner_html();
    assert!(html.contains("Error: No MIDI file provided."));
    assert_eq!(calls(&engine, "created"), 0.0);
    assert_eq!(player_state("missing-source"), None);

    // The inert widget is still registered and can be removed
    assert!(unmount_player("missing-source"));
    assert_eq!(document().get_element_by_id("missing-source").unwrap().inner_html(), "");
}

#[wasm_bindgen_test]
fn test_strict_policy_rejects_plain_url() {
    fresh_mount("strict");
    let engine = recording_engine(false);
    let options = js_sys::Object::new();
    Reflect::set(&options, &"sourcePolicy".into(), &"midiDataUrl".into()).unwrap();

    let result = mount_player_with_engine("strict", Some("song.mid".into()), engine.clone(), options.into());

    assert!(result.is_err());
    let html = document().get_element_by_id("strict").unwrap().inner_html();
    assert!(html.contains("midi-player-error"));
    assert!(html.contains("Invalid MIDI file URL"));
    assert_eq!(calls(&engine, "created"), 0.0);
    assert_eq!(player_state("strict"), None);
    assert!(unmount_player("strict"));
}

#[wasm_bindgen_test]
fn test_initial_buttons() {
    fresh_mount("initial");
    let engine = recording_engine(false);

    assert!(mount_player_with_engine("initial", Some("song.mid".into()), engine.clone(), JsValue::UNDEFINED).unwrap());

    assert!(!button("initial-play-button").disabled());
    assert!(button("initial-pause-button").disabled());
    assert_eq!(calls(&engine, "created"), 1.0);
    assert_eq!(player_state("initial").as_deref(), Some("paused"));
    assert!(unmount_player("initial"));
}

#[wasm_bindgen_test]
async fn test_click_play_then_pause() {
    fresh_mount("clicks");
    let engine = recording_engine(false);
    mount_player_with_engine("clicks", Some("song.mid".into()), engine.clone(), JsValue::UNDEFINED).unwrap();

    button("clicks-play-button").click();
    // Play disables itself before the unlock promise settles
    assert!(button("clicks-play-button").disabled());
    settle().await;

    assert_eq!(calls(&engine, "unlocks"), 1.0);
    assert_eq!(calls(&engine, "starts"), 1.0);
    assert!(!button("clicks-pause-button").disabled());
    assert_eq!(player_state("clicks").as_deref(), Some("playing"));

    button("clicks-pause-button").click();
    assert_eq!(calls(&engine, "stops"), 1.0);
    assert!(!button("clicks-play-button").disabled());
    assert!(button("clicks-pause-button").disabled());

    unmount_player("clicks");
}

#[wasm_bindgen_test]
async fn test_construction_failure_leaves_play_inert() {
    fresh_mount("broken");
    let engine = recording_engine(true);

    assert!(mount_player_with_engine("broken", Some("song.mid".into()), engine.clone(), JsValue::UNDEFINED).unwrap());

    button("broken-play-button").click();
    settle().await;

    assert_eq!(calls(&engine, "unlocks"), 0.0);
    assert!(!button("broken-play-button").disabled());
    assert!(button("broken-pause-button").disabled());
    unmount_player("broken");
}

#[wasm_bindgen_test]
fn test_unmount_clears_mount_point() {
    fresh_mount("gone");
    mount_player_with_engine("gone", Some("song.mid".into()), recording_engine(false), JsValue::UNDEFINED).unwrap();

    assert!(unmount_player("gone"));
    assert!(!unmount_player("gone"));
    assert_eq!(document().get_element_by_id("gone").unwrap().inner_html(), "");
}

#[wasm_bindgen_test]
fn test_missing_mount_point_is_an_error() {
    assert!(mount_player("no-such-element", Some("song.mid".into()), JsValue::UNDEFINED).is_err());
}
