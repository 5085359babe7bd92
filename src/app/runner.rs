use crate::config::{ProbeSettings, RunConfiguration};
use crate::diagnostics::{
    ApiCheck, DirectoryReport, EnvReport, NetworkReport, check_authenticated_api,
    check_directories, check_env_vars, check_fanout, check_network,
};
use crate::runtime::{DeploymentMode, ExecutionMode, RunId};
use reqwest::Client;
use std::fmt;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// A condition that marks the whole run as failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FatalCondition {
    DirectoryAccess,
    NetworkPolicy(DeploymentMode),
    AuthenticatedApi,
}

impl FatalCondition {
    /// Stable identifier used in the serverless response.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DirectoryAccess => "directory_access",
            Self::NetworkPolicy(_) => "network_policy",
            Self::AuthenticatedApi => "authenticated_api",
        }
    }
}

impl fmt::Display for FatalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryAccess => f.write_str("directory access failed"),
            Self::NetworkPolicy(mode) => write!(
                f,
                "internet access does not match deployment mode '{}'",
                mode.as_str()
            ),
            Self::AuthenticatedApi => f.write_str("authenticated API check failed"),
        }
    }
}

/// Everything one run observed.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: RunId,
    pub execution: ExecutionMode,
    pub deployment_mode: DeploymentMode,
    pub env: EnvReport,
    pub directories: DirectoryReport,
    pub network: NetworkReport,
    pub api: ApiCheck,
    pub symlinks: Vec<String>,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Fatal conditions in the order they are reported.
    pub fn failures(&self) -> Vec<FatalCondition> {
        let mut failures = Vec::new();
        if !self.directories.is_ok() {
            failures.push(FatalCondition::DirectoryAccess);
        }
        if !self.network.policy_valid {
            failures.push(FatalCondition::NetworkPolicy(self.deployment_mode.clone()));
        }
        if self.api.is_failure() {
            failures.push(FatalCondition::AuthenticatedApi);
        }
        failures
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Runs the five checks in fixed order against one configuration.
pub struct ProbeRunner {
    settings: ProbeSettings,
    client: Client,
}

impl ProbeRunner {
    pub fn new(settings: ProbeSettings, client: Client) -> Self {
        Self { settings, client }
    }

    /// Execute every check, never short-circuiting, and log the summary.
    pub async fn run(
        &self,
        config: &RunConfiguration,
        execution: ExecutionMode,
        run_id: &RunId,
    ) -> RunSummary {
        let start = Instant::now();
        let rule = "=".repeat(60);
        info!("{rule}");
        info!("Processor Test - Dual Mode Validation");
        info!(run_id = %run_id, "Run ID: {run_id}");
        info!(runtime = %execution, "Runtime: {execution}");
        info!(pid = std::process::id(), "PID: {}", std::process::id());
        info!("Started: {}", chrono::Utc::now().to_rfc3339());
        info!("{rule}");
        info!(integration_id = %config.integration_id, "Integration ID: {}", config.integration_id);

        let env = check_env_vars(config);
        let directories = check_directories(config);
        let network =
            check_network(config, execution, &self.settings.network, &self.client).await;
        let api = check_authenticated_api(config, &self.settings.api, &self.client).await;
        let symlinks = check_fanout(config, directories.input_accessible, run_id);

        let summary = RunSummary {
            run_id: run_id.clone(),
            execution,
            deployment_mode: config.deployment_mode.clone(),
            env,
            directories,
            network,
            api,
            symlinks,
            elapsed: start.elapsed(),
        };
        log_summary(&summary);
        summary
    }
}

fn log_summary(summary: &RunSummary) {
    for line in super::report::summary_lines(summary) {
        info!("{line}");
    }

    let failures = summary.failures();
    for failure in &failures {
        error!(condition = failure.code(), "CRITICAL: {failure}");
    }
    if failures.is_empty() {
        info!("All tests completed successfully");
    }
}
