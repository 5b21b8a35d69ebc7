use clap::{Parser, Subcommand};

const VERSION: &str = match option_env!("APP_VERSION") {
    Some(version) => version,
    _ => "0.1.0-dev",
};
#[derive(Parser)]
#[command(name = "hostenv", version = VERSION)]
pub struct Cli {
    /// Log at debug level, overriding the level set in HOSTENV_LOG_LEVEL
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prints the detected host runtime
    Runtime {
        /// Print the runtime as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prints the value of an environment variable
    Get {
        /// Variable name, surrounding whitespace is ignored
        key: String,
        /// Print the outcome as a JSON report
        #[arg(long)]
        json: bool,
    },
    /// Sets an environment variable for this process
    /// and optionally runs a command that inherits it
    Set {
        /// Variable name, surrounding whitespace is ignored
        key: String,
        /// Value to store. An empty string is a valid value.
        value: Option<String>,
        /// Print the outcome as a JSON report
        #[arg(long)]
        json: bool,
        /// Command to spawn after the write, given after `--`
        #[arg(last = true)]
        command: Vec<String>,
    },
}
