use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use hostenv_core::report::Report;
use hostenv_core::runtime::TargetRuntime;
use hostenv_core::{EnvAccessor, EnvResult};

use crate::cli::commands::{Cli, Command};
use crate::cli::rt;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

/// Parses the command line and runs it against the native runtime,
/// returning the process exit code.
pub fn fork_run() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    logger_init(cli.verbose);
    let runtime = rt::init();

    run(cli, runtime, &mut std::io::stdout().lock())
}

pub fn run<W: Write>(cli: Cli, runtime: TargetRuntime, out: &mut W) -> anyhow::Result<u8> {
    let accessor = EnvAccessor::init(runtime);
    match cli.command {
        Command::Runtime { json } => {
            let runtime = accessor.detect_runtime();
            if json {
                writeln!(out, "{}", serde_json::json!({ "runtime": runtime }))?;
            } else {
                writeln!(out, "{}", runtime)?;
            }
            Ok(SUCCESS)
        }
        Command::Get { key, json } => {
            let result = accessor.get_env(&key);
            if json {
                return emit_report(out, result);
            }
            match result {
                Ok(value) => {
                    writeln!(out, "{}", value)?;
                    Ok(SUCCESS)
                }
                Err(e) => {
                    log::error!("{}", e);
                    Ok(FAILURE)
                }
            }
        }
        Command::Set {
            key,
            value,
            json,
            command,
        } => {
            let result = accessor.set_env(&key, value.as_deref());
            let failed = result.is_err();
            if json {
                emit_report(out, result)?;
            } else if let Err(e) = result {
                log::error!("{}", e);
            } else {
                log::info!("Set {}", key.trim());
            }

            if failed {
                return Ok(FAILURE);
            }
            if command.is_empty() {
                return Ok(SUCCESS);
            }
            spawn(&command)
        }
    }
}

fn emit_report<W: Write, T>(out: &mut W, result: EnvResult<T>) -> anyhow::Result<u8>
where
    Report: From<EnvResult<T>>,
{
    let report = Report::from(result);
    let code = if report.ok { SUCCESS } else { FAILURE };
    writeln!(out, "{}", serde_json::to_string(&report)?)?;
    Ok(code)
}

/// Runs `command` with the current environment and mirrors its exit status.
fn spawn(command: &[String]) -> anyhow::Result<u8> {
    let (program, args) = command
        .split_first()
        .context("No command given to run")?;
    log::debug!("Running {} {:?}", program, args);

    let status = process::Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Unable to run {}", program))?;

    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(FAILURE))
}

const LOG_LEVEL_VAR: &str = "HOSTENV_LOG_LEVEL";

fn logger_builder(verbose: bool) -> env_logger::Builder {
    let env = env_logger::Env::new().filter_or(LOG_LEVEL_VAR, "info");

    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
}

fn logger_init(verbose: bool) {
    let _ = logger_builder(verbose).try_init();
}
