use std::borrow::Cow;

pub mod accessor;
pub mod error;
pub mod key;
pub mod report;
pub mod runtime;

pub use accessor::EnvAccessor;
pub use error::{EnvError, EnvResult, ErrorKind};
pub use runtime::{Runtime, TargetRuntime};

/// Probes the host for ambient global bindings.
pub trait GlobalsIO: Send + Sync {
    /// Returns true when `name` is bound and not `undefined`.
    fn has(&self, name: &str) -> bool;
}

/// A host-provided, process-scoped string-to-string store.
pub trait EnvIO: Send + Sync {
    /// `Ok(None)` when the key is unbound, `Err` when the host refuses the read.
    fn get(&self, key: &str) -> anyhow::Result<Option<Cow<'_, str>>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
