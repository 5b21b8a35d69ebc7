use std::borrow::Cow;

use anyhow::{anyhow, bail, Context};
use hostenv_core::EnvIO;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::globals::{global, property};
use crate::to_anyhow;

/// `process.env`, used by Node and Bun.
#[derive(Default, Clone)]
pub struct ProcessEnv {}

impl ProcessEnv {
    pub fn available() -> bool {
        global("process").and_then(|p| property(&p, "env")).is_some()
    }

    fn env() -> anyhow::Result<JsValue> {
        global("process")
            .and_then(|p| property(&p, "env"))
            .context("process.env is not defined")
    }
}

impl EnvIO for ProcessEnv {
    fn get(&self, key: &str) -> anyhow::Result<Option<Cow<'_, str>>> {
        let value = Reflect::get(&Self::env()?, &JsValue::from_str(key)).map_err(to_anyhow)?;
        from_js(key, value)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let written = Reflect::set(
            &Self::env()?,
            &JsValue::from_str(key),
            &JsValue::from_str(value),
        )
        .map_err(to_anyhow)?;
        if !written {
            bail!("process.env refused to store {}", key);
        }
        Ok(())
    }
}

/// `Deno.env`, whose accessors throw without `--allow-env`.
#[derive(Default, Clone)]
pub struct DenoEnv {}

impl DenoEnv {
    pub fn available() -> bool {
        global("Deno").and_then(|d| property(&d, "env")).is_some()
    }

    fn method(name: &str) -> anyhow::Result<(JsValue, Function)> {
        let env = global("Deno")
            .and_then(|d| property(&d, "env"))
            .context("Deno.env is not defined")?;
        let method = property(&env, name)
            .and_then(|m| m.dyn_into::<Function>().ok())
            .with_context(|| format!("Deno.env.{} is not a function", name))?;
        Ok((env, method))
    }
}

impl EnvIO for DenoEnv {
    fn get(&self, key: &str) -> anyhow::Result<Option<Cow<'_, str>>> {
        let (env, get) = Self::method("get")?;
        let value = get
            .call1(&env, &JsValue::from_str(key))
            .map_err(to_anyhow)?;
        from_js(key, value)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let (env, set) = Self::method("set")?;
        set.call2(&env, &JsValue::from_str(key), &JsValue::from_str(value))
            .map_err(to_anyhow)?;
        Ok(())
    }
}

fn from_js(key: &str, value: JsValue) -> anyhow::Result<Option<Cow<'static, str>>> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .as_string()
        .map(|v| Some(Cow::from(v)))
        .ok_or_else(|| anyhow!("{} is bound to a non-string value", key))
}
