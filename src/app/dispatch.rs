use crate::app::invoke::{InvocationPayload, handle_invocation};
use crate::app::runner::ProbeRunner;
use crate::cli::{Cli, Commands};
use crate::config::{ProbeSettings, RunConfiguration};
use crate::error::ProbeError;
use crate::runtime::{ExecutionMode, RunId};
use crate::transport::build_probe_client;
use std::process::ExitCode;

/// Execute the parsed command.
///
/// `Err` means the run never started (bad settings file, bad payload). Check
/// failures are reported through the returned exit code.
pub async fn dispatch(cli: Cli) -> Result<ExitCode, ProbeError> {
    let settings = ProbeSettings::load(cli.config.as_deref())?;
    let run_id = match cli.run_id.as_deref() {
        Some(fixed) => RunId::new(fixed)?,
        None => RunId::generate(),
    };
    let base = RunConfiguration::from_process_env(&settings.run);
    let runner = ProbeRunner::new(settings, build_probe_client());

    match cli.resolved_command() {
        Commands::Run => {
            let execution = ExecutionMode::from_process_env();
            let summary = runner.run(&base, execution, &run_id).await;
            Ok(summary.exit_code())
        }
        Commands::Invoke { payload } => {
            let payload = InvocationPayload::read(payload.as_deref())?;
            let response = handle_invocation(&runner, payload, base, &run_id).await;
            let rendered = serde_json::to_string(&response).map_err(ProbeError::Encode)?;
            println!("{rendered}");
            Ok(if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
