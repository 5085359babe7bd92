use crate::runtime::DeploymentMode;
use crate::security::Secret;

pub const INPUT_DIR_VAR: &str = "INPUT_DIR";
pub const OUTPUT_DIR_VAR: &str = "OUTPUT_DIR";
pub const INTEGRATION_ID_VAR: &str = "INTEGRATION_ID";
pub const SESSION_TOKEN_VAR: &str = "SESSION_TOKEN";
pub const REFRESH_TOKEN_VAR: &str = "REFRESH_TOKEN";
pub const API_HOST_VAR: &str = "PENNSIEVE_API_HOST";
pub const API_HOST2_VAR: &str = "PENNSIEVE_API_HOST2";
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
pub const REGION_VAR: &str = "REGION";
pub const DEPLOYMENT_MODE_VAR: &str = "DEPLOYMENT_MODE";

/// Value used for informational fields the context did not provide.
pub const UNKNOWN: &str = "unknown";

/// Everything one probe run needs to know about its execution context.
///
/// Built once per invocation and passed by reference into every check.
#[derive(Debug, Clone, Default)]
pub struct RunConfiguration {
    pub input_dir: String,
    pub output_dir: String,
    pub integration_id: String,
    pub session_token: Secret,
    pub refresh_token: Secret,
    pub api_host: String,
    pub api_host2: String,
    pub environment: String,
    pub region: String,
    pub deployment_mode: DeploymentMode,
}

/// One row of the environment report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigField {
    pub name: &'static str,
    pub present: bool,
    /// Value safe to print. Credentials are already masked.
    pub display: String,
}

impl RunConfiguration {
    /// Report rows in a fixed order, credentials masked.
    pub fn fields(&self) -> Vec<ConfigField> {
        let plain = |name: &'static str, value: &str| ConfigField {
            name,
            present: !value.is_empty(),
            display: value.to_string(),
        };
        let secret = |name: &'static str, value: &Secret| ConfigField {
            name,
            present: !value.is_empty(),
            display: value.masked().to_string(),
        };

        vec![
            plain("input_dir", &self.input_dir),
            plain("output_dir", &self.output_dir),
            plain("integration_id", &self.integration_id),
            secret("session_token", &self.session_token),
            secret("refresh_token", &self.refresh_token),
            plain("api_host", &self.api_host),
            plain("api_host2", &self.api_host2),
            plain("environment", &self.environment),
            plain("region", &self.region),
            plain("deployment_mode", self.deployment_mode.as_str()),
        ]
    }

    /// Session token, when one was supplied.
    pub fn session_token(&self) -> Option<&Secret> {
        self.session_token.non_empty()
    }

    /// Refresh token, when one was supplied.
    pub fn refresh_token(&self) -> Option<&Secret> {
        self.refresh_token.non_empty()
    }
}
