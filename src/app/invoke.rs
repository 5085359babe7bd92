//! Serverless entry point.
//!
//! The invocation payload carries the per-invocation fields. Static fields
//! (API hosts, environment, region, deployment mode) come from the function's
//! own environment. The payload is merged straight into the run
//! configuration; the process environment is never mutated.

use super::runner::ProbeRunner;
use crate::config::RunConfiguration;
use crate::error::PayloadError;
use crate::runtime::{ExecutionMode, RunId};
use crate::security::Secret;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::info;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAILURE: &str = "failure";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationPayload {
    #[serde(default)]
    pub input_dir: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub integration_id: Option<String>,
    #[serde(default)]
    pub session_token: Option<Secret>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status: String,
    pub integration_id: String,
    /// Fatal conditions, present only on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<String>,
}

impl InvocationResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl InvocationPayload {
    pub fn parse(raw: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read a payload from inline JSON, `@path`, or stdin (`None` or `-`).
    pub fn read(source: Option<&str>) -> Result<Self, PayloadError> {
        let raw = match source {
            None | Some("-") => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| PayloadError::Read(format!("stdin: {e}")))?;
                buf
            }
            Some(arg) => match arg.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path)
                    .map_err(|e| PayloadError::Read(format!("{path}: {e}")))?,
                None => arg.to_string(),
            },
        };
        Self::parse(&raw)
    }

    /// Overlay the per-invocation fields onto `base`. Absent fields become
    /// empty strings, matching an invocation that omitted them.
    pub fn into_configuration(self, base: RunConfiguration) -> RunConfiguration {
        RunConfiguration {
            input_dir: self.input_dir.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_default(),
            integration_id: self.integration_id.unwrap_or_default(),
            session_token: self.session_token.unwrap_or_default(),
            ..base
        }
    }
}

/// Run the probe for one invocation and build the response.
pub async fn handle_invocation(
    runner: &ProbeRunner,
    payload: InvocationPayload,
    base: RunConfiguration,
    run_id: &RunId,
) -> InvocationResponse {
    info!("Lambda handler invoked with event: {payload:?}");

    let config = payload.into_configuration(base);
    let summary = runner.run(&config, ExecutionMode::Serverless, run_id).await;
    let failures: Vec<String> = summary
        .failures()
        .iter()
        .map(|f| f.code().to_string())
        .collect();

    InvocationResponse {
        status: if failures.is_empty() {
            STATUS_SUCCESS
        } else {
            STATUS_FAILURE
        }
        .to_string(),
        integration_id: config.integration_id.clone(),
        failures,
    }
}
