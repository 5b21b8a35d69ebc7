use std::borrow::Cow;
use std::env::VarError;

use anyhow::anyhow;
use hostenv_core::EnvIO;

/// The OS environment of the current process.
#[derive(Default, Clone)]
pub struct NativeEnv {}

impl EnvIO for NativeEnv {
    fn get(&self, key: &str) -> anyhow::Result<Option<Cow<'_, str>>> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(Cow::from(value))),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(anyhow!("value is not valid unicode")),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        // std::env::set_var panics on these instead of returning an error
        if key.contains(['=', '\0']) {
            return Err(anyhow!("key must not contain '=' or NUL"));
        }
        if value.contains('\0') {
            return Err(anyhow!("value must not contain NUL"));
        }
        std::env::set_var(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let env = NativeEnv::default();
        env.set("HOSTENV_NATIVE_ENV_TEST", "native").unwrap();
        assert_eq!(
            env.get("HOSTENV_NATIVE_ENV_TEST").unwrap().as_deref(),
            Some("native")
        );
    }

    #[test]
    fn test_unset_is_none() {
        let env = NativeEnv::default();
        assert!(env.get("HOSTENV_NATIVE_ENV_UNSET").unwrap().is_none());
    }

    #[test]
    fn test_invalid_key_is_error() {
        let env = NativeEnv::default();
        assert!(env.set("A=B", "v").is_err());
        assert!(env.set("A\0B", "v").is_err());
        assert!(env.set("HOSTENV_NATIVE_NUL", "v\0").is_err());
    }
}
