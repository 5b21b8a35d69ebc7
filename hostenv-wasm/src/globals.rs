use hostenv_core::GlobalsIO;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Probes `globalThis` the way `typeof name !== "undefined"` would.
#[derive(Default, Clone)]
pub struct WasmGlobals {}

impl GlobalsIO for WasmGlobals {
    fn has(&self, name: &str) -> bool {
        global(name).is_some()
    }
}

/// Reads `globalThis[name]`, treating `undefined` as unbound.
pub(crate) fn global(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined())
}

/// Reads `target[name]`, treating `undefined` and `null` as unbound.
pub(crate) fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}
