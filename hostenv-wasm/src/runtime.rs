use crate::env::{DenoEnv, ProcessEnv};
use crate::globals::WasmGlobals;
use hostenv_core::runtime::TargetRuntime;
use hostenv_core::EnvIO;
use std::sync::Arc;

fn init_process_env() -> Option<Arc<dyn EnvIO>> {
    ProcessEnv::available().then(|| Arc::new(ProcessEnv::default()) as Arc<dyn EnvIO>)
}

fn init_deno_env() -> Option<Arc<dyn EnvIO>> {
    DenoEnv::available().then(|| Arc::new(DenoEnv::default()) as Arc<dyn EnvIO>)
}

/// Builds the runtime for the current JavaScript host. Stores the host does
/// not expose are left out.
pub fn init() -> TargetRuntime {
    TargetRuntime {
        globals: Arc::new(WasmGlobals::default()),
        process_env: init_process_env(),
        deno_env: init_deno_env(),
    }
}
