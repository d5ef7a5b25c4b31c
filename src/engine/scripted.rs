//! Host-supplied audio engine
//!
//! Lets the embedding page inject its own engine object:
//!
//! ```js
//! {
//!   createPlayer(url) { return { start() {}, stop() {} }; },
//!   unlock() { return Promise.resolve(); }   // optional
//! }
//! ```

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{AudioEngine, AudioPlayer, EngineError};
use crate::models::SourceUrl;

/// Look up `name` on `target` and call it with `args`
fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, EngineError> {
    let member = Reflect::get(target, &JsValue::from_str(name)).map_err(|e| EngineError::from_js(&e))?;
    let function = member
        .dyn_into::<Function>()
        .map_err(|_| EngineError::new(format!("engine object has no '{}' method", name)))?;

    let result = match args {
        [] => function.call0(target),
        [a] => function.call1(target, a),
        _ => return Err(EngineError::new(format!("too many arguments for '{}'", name))),
    };
    result.map_err(|e| EngineError::from_js(&e))
}

fn has_method(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(name))
        .map(|member| member.is_function())
        .unwrap_or(false)
}

#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    object: JsValue,
}

impl ScriptedEngine {
    /// Wrap `object`, which must at least provide `createPlayer`
    pub fn new(object: JsValue) -> Result<Self, EngineError> {
        if !object.is_object() {
            return Err(EngineError::new("engine must be an object"));
        }
        if !has_method(&object, "createPlayer") {
            return Err(EngineError::new("engine object has no 'createPlayer' method"));
        }
        Ok(Self { object })
    }
}

#[derive(Debug)]
pub struct ScriptedPlayer {
    object: JsValue,
}

impl AudioEngine for ScriptedEngine {
    type Player = ScriptedPlayer;

    fn create_player(&self, source: &SourceUrl) -> Result<ScriptedPlayer, EngineError> {
        let object = call_method(&self.object, "createPlayer", &[&JsValue::from_str(source.as_str())])?;
        if object.is_null() || object.is_undefined() {
            return Err(EngineError::new("createPlayer returned no player"));
        }
        Ok(ScriptedPlayer { object })
    }

    async fn unlock(&self) -> Result<(), EngineError> {
        if !has_method(&self.object, "unlock") {
            return Ok(());
        }

        let result = call_method(&self.object, "unlock", &[])?;
        if let Some(promise) = result.dyn_ref::<Promise>() {
            JsFuture::from(promise.clone())
                .await
                .map_err(|e| EngineError::from_js(&e))?;
        }
        Ok(())
    }
}

impl AudioPlayer for ScriptedPlayer {
    fn start(&mut self) -> Result<(), EngineError> {
        call_method(&self.object, "start", &[]).map(|_| ())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        call_method(&self.object, "stop", &[]).map(|_| ())
    }
}
