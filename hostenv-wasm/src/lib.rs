use anyhow::anyhow;
use hostenv_core::report::Report;
use hostenv_core::EnvAccessor;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

mod env;
mod globals;
mod runtime;

#[wasm_bindgen(start)]
fn start() {
    console_error_panic_hook::set_once();
    init_log();
}

pub(crate) fn init_log() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

fn accessor() -> EnvAccessor {
    EnvAccessor::init(runtime::init())
}

/// Returns one of `node`, `deno`, `bun`, `browser` or `unknown`.
#[wasm_bindgen(js_name = detectRuntime)]
pub fn detect_runtime() -> String {
    accessor().detect_runtime().to_string()
}

/// Reads an environment variable.
///
/// Resolves to `{ ok: true, value }` or `{ ok: false, kind, message }`,
/// never throws.
#[wasm_bindgen(js_name = getEnv)]
pub fn get_env(key: Option<String>) -> JsValue {
    let key = key.unwrap_or_default();
    to_js(Report::from(accessor().get_env(&key)))
}

/// Sets an environment variable for the current process.
///
/// `undefined` and `null` values report `missing_value`; `""` is stored.
#[wasm_bindgen(js_name = setEnv)]
pub fn set_env(key: Option<String>, value: Option<String>) -> JsValue {
    let key = key.unwrap_or_default();
    to_js(Report::from(accessor().set_env(&key, value.as_deref())))
}

fn to_js(report: Report) -> JsValue {
    let object = Object::new();
    let fields = [
        ("ok", Some(JsValue::from_bool(report.ok))),
        ("value", report.value.map(JsValue::from)),
        ("kind", report.kind.map(|k| JsValue::from_str(k.as_str()))),
        ("message", report.message.map(JsValue::from)),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            if let Err(e) = Reflect::set(&object, &JsValue::from_str(name), &value) {
                log::error!("Unable to build report: {}", to_anyhow(e));
            }
        }
    }
    object.into()
}

fn to_anyhow(e: JsValue) -> anyhow::Error {
    match e.dyn_ref::<js_sys::Error>() {
        Some(error) => anyhow!("{}", String::from(error.message())),
        None => anyhow!("{:?}", e),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;

    fn field(report: &JsValue, name: &str) -> JsValue {
        Reflect::get(report, &JsValue::from_str(name)).unwrap()
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_detect_runtime() {
        assert_eq!(detect_runtime(), "node");
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_api_token_scenario() {
        let report = set_env(Some("API_TOKEN".into()), Some("abc123".into()));
        assert_eq!(field(&report, "ok"), JsValue::TRUE);
        assert!(field(&report, "value").is_undefined());

        let report = get_env(Some("  API_TOKEN ".into()));
        assert_eq!(field(&report, "ok"), JsValue::TRUE);
        assert_eq!(field(&report, "value").as_string().as_deref(), Some("abc123"));

        let report = get_env(Some("API_TOKEN_X".into()));
        assert_eq!(field(&report, "ok"), JsValue::FALSE);
        assert_eq!(
            field(&report, "kind").as_string().as_deref(),
            Some("key_not_found")
        );
        assert_eq!(
            field(&report, "message").as_string().as_deref(),
            Some("key not found: API_TOKEN_X")
        );
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_absent_and_empty_values() {
        let report = set_env(Some("HOSTENV_WASM_EMPTY".into()), None);
        assert_eq!(
            field(&report, "kind").as_string().as_deref(),
            Some("missing_value")
        );

        let report = set_env(Some("HOSTENV_WASM_EMPTY".into()), Some(String::new()));
        assert_eq!(field(&report, "ok"), JsValue::TRUE);
        let report = get_env(Some("HOSTENV_WASM_EMPTY".into()));
        assert_eq!(field(&report, "value").as_string().as_deref(), Some(""));
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_missing_key() {
        for key in [None, Some(String::new()), Some("   ".to_string())] {
            let report = get_env(key.clone());
            assert_eq!(
                field(&report, "kind").as_string().as_deref(),
                Some("missing_key")
            );
            let report = set_env(key, Some("v".into()));
            assert_eq!(
                field(&report, "message").as_string().as_deref(),
                Some("key is required")
            );
        }
    }
}
