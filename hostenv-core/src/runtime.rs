use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::Serialize;

use crate::{EnvIO, GlobalsIO};

/// Globals probed in order, first hit decides the runtime.
const PROBES: [(&str, Runtime); 4] = [
    ("process", Runtime::Node),
    ("Deno", Runtime::Deno),
    ("Bun", Runtime::Bun),
    ("window", Runtime::Browser),
];

/// The host runtime the code is executing under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Node,
    Deno,
    Bun,
    Browser,
    Unknown,
}

impl Runtime {
    /// Classifies the host by probing its globals.
    ///
    /// Hosts exposing several of the probed bindings (compatibility shims,
    /// Bun's `process`) resolve to the first one in probe order.
    pub fn detect(globals: &dyn GlobalsIO) -> Self {
        PROBES
            .iter()
            .find(|(name, _)| globals.has(name))
            .map(|(_, runtime)| *runtime)
            .unwrap_or(Runtime::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Node => "node",
            Runtime::Deno => "deno",
            Runtime::Bun => "bun",
            Runtime::Browser => "browser",
            Runtime::Unknown => "unknown",
        }
    }
}

impl Display for Runtime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The TargetRuntime struct unifies the host-specific IO implementations
/// available to the accessor.
#[derive(Clone)]
pub struct TargetRuntime {
    /// Probe for ambient global bindings.
    pub globals: Arc<dyn GlobalsIO>,
    /// `process.env`, shared by Node and Bun.
    pub process_env: Option<Arc<dyn EnvIO>>,
    /// `Deno.env`.
    pub deno_env: Option<Arc<dyn EnvIO>>,
}
