use hostenv_core::GlobalsIO;

/// Globals visible to a native process.
///
/// A native process always owns a process-scoped environment, so it answers
/// to the `process` binding and nothing else.
#[derive(Default, Clone)]
pub struct NativeGlobals {}

impl GlobalsIO for NativeGlobals {
    fn has(&self, name: &str) -> bool {
        name == "process"
    }
}
