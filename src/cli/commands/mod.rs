use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `processor-probe` - validation probe for workflow compute nodes.
#[derive(Parser, Debug)]
#[command(name = "processor-probe")]
#[command(version)]
#[command(
    about = "Validate a compute node's environment, directories, network policy and credentials.",
    long_about = None
)]
pub struct Cli {
    /// Optional TOML settings file (endpoints, timeouts, local run defaults)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fixed run id instead of a random one (namespaces created symlinks)
    #[arg(long, global = true)]
    pub run_id: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run every check using the process environment (container mode, default)
    Run,

    /// Handle one serverless invocation and print the JSON response
    Invoke {
        /// Payload as inline JSON, @FILE, or - for stdin (default: stdin)
        #[arg(short, long)]
        payload: Option<String>,
    },
}

impl Cli {
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
