use crate::error::{EnvError, EnvResult};
use crate::key::EnvKey;
use crate::runtime::{Runtime, TargetRuntime};
use crate::EnvIO;

/// Reads and writes the host's environment store, normalizing every outcome
/// into an [`EnvResult`].
///
/// The runtime is re-detected on every call. Writes are not serialized; when
/// several writers race on one key the last write wins.
pub struct EnvAccessor {
    runtime: TargetRuntime,
}

impl EnvAccessor {
    pub fn init(runtime: TargetRuntime) -> Self {
        Self { runtime }
    }

    pub fn detect_runtime(&self) -> Runtime {
        Runtime::detect(self.runtime.globals.as_ref())
    }

    /// Looks up `key` after trimming it.
    pub fn get_env(&self, key: &str) -> EnvResult<String> {
        let (runtime, store) = self.store()?;
        let key = EnvKey::parse(key)?;
        log::debug!("get_env {} on {}", key, runtime);

        match store.get(&key) {
            Ok(Some(value)) => Ok(value.into_owned()),
            Ok(None) => Err(EnvError::KeyNotFound {
                key: key.into_inner(),
            }),
            Err(e) => Err(rejected(runtime, key, e)),
        }
    }

    /// Writes `value` under the trimmed `key` for the current process.
    ///
    /// `None` means no value was supplied and fails with `MissingValue`;
    /// `Some("")` is a valid value.
    pub fn set_env(&self, key: &str, value: Option<&str>) -> EnvResult<()> {
        let (runtime, store) = self.store()?;
        let key = EnvKey::parse(key)?;
        let value = value.ok_or_else(|| EnvError::MissingValue {
            key: key.to_string(),
        })?;
        log::debug!("set_env {} on {}", key, runtime);

        store
            .set(&key, value)
            .map_err(|e| rejected(runtime, key, e))
    }

    /// Resolves the store for the detected runtime. Runtime failures come
    /// before any key validation so unsupported hosts fail uniformly.
    fn store(&self) -> EnvResult<(Runtime, &dyn EnvIO)> {
        let runtime = self.detect_runtime();
        let store = match runtime {
            Runtime::Node | Runtime::Bun => self.runtime.process_env.as_deref(),
            Runtime::Deno => self.runtime.deno_env.as_deref(),
            Runtime::Browser | Runtime::Unknown => {
                return Err(EnvError::UnsupportedRuntime { runtime });
            }
        };

        match store {
            Some(store) => Ok((runtime, store)),
            None => {
                log::warn!("Environment store not available on {}", runtime);
                Err(EnvError::UnsupportedRuntime { runtime })
            }
        }
    }
}

fn rejected(runtime: Runtime, key: EnvKey, e: anyhow::Error) -> EnvError {
    log::warn!("{} rejected access to {}: {}", runtime, key, e);
    EnvError::StoreRejected {
        runtime,
        key: key.into_inner(),
        reason: e.to_string(),
    }
}
