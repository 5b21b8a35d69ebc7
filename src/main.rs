use std::process::ExitCode;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<ExitCode> {
    let code = hostenv::cli::runner::fork_run()?;
    Ok(ExitCode::from(code))
}
