use hostenv_core::runtime::TargetRuntime;
use std::sync::Arc;

mod env;
mod globals;

pub fn init() -> TargetRuntime {
    TargetRuntime {
        globals: Arc::new(globals::NativeGlobals::default()),
        process_env: Some(Arc::new(env::NativeEnv::default())),
        deno_env: None,
    }
}
