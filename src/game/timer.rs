use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Runs `callback` once after `delay` via `window.setTimeout`.
pub fn set_timeout(delay: Duration, callback: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let closure = Closure::once_into_js(callback);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), millis)
}
