#![warn(clippy::all, clippy::pedantic)]

use clap::Parser;
use processor_probe::app::dispatch;
use processor_probe::cli::{Cli, Commands};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit status when the run could not start at all.
const SETUP_FAILURE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // reqwest needs a process-level rustls provider before the first client is built.
    if let Err(e) = rustls::crypto::ring::default_provider().install_default() {
        eprintln!("Warning: Failed to install default crypto provider: {e:?}");
    }

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false);
    // Keep stdout clean for the JSON response in invoke mode.
    let installed = if matches!(cli.resolved_command(), Commands::Invoke { .. }) {
        tracing::subscriber::set_global_default(builder.with_writer(std::io::stderr).finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    if let Err(e) = installed {
        eprintln!("Warning: Failed to install log subscriber: {e}");
    }

    match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            let e = anyhow::Error::from(e);
            eprintln!("Error: {e:#}");
            ExitCode::from(SETUP_FAILURE)
        }
    }
}
