use super::run::{
    API_HOST_VAR, API_HOST2_VAR, DEPLOYMENT_MODE_VAR, ENVIRONMENT_VAR, INPUT_DIR_VAR,
    INTEGRATION_ID_VAR, OUTPUT_DIR_VAR, REFRESH_TOKEN_VAR, REGION_VAR, SESSION_TOKEN_VAR,
    UNKNOWN,
};
use super::{RunConfiguration, RunDefaults};
use crate::runtime::DeploymentMode;
use crate::security::Secret;

impl RunConfiguration {
    /// Build a configuration from the process environment.
    pub fn from_process_env(defaults: &RunDefaults) -> Self {
        Self::from_lookup(defaults, |key| std::env::var(key).ok())
    }

    /// Build a configuration through `lookup`.
    ///
    /// A key the lookup returns (even empty) wins over the settings-file
    /// fallback, which wins over the built-in default. Credentials are never
    /// read from the settings file.
    pub fn from_lookup<F>(defaults: &RunDefaults, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .or_else(|| defaults.get(key).map(ToOwned::to_owned))
                .unwrap_or_else(|| fallback.to_string())
        };

        let deployment_mode = DeploymentMode::parse(&read(DEPLOYMENT_MODE_VAR, ""));
        if let DeploymentMode::Other(label) = &deployment_mode {
            tracing::warn!(
                mode = %label,
                "unrecognized deployment mode; expecting internet access"
            );
        }

        Self {
            input_dir: read(INPUT_DIR_VAR, ""),
            output_dir: read(OUTPUT_DIR_VAR, ""),
            integration_id: read(INTEGRATION_ID_VAR, UNKNOWN),
            session_token: Secret::from(lookup(SESSION_TOKEN_VAR).unwrap_or_default()),
            refresh_token: Secret::from(lookup(REFRESH_TOKEN_VAR).unwrap_or_default()),
            api_host: read(API_HOST_VAR, ""),
            api_host2: read(API_HOST2_VAR, ""),
            environment: read(ENVIRONMENT_VAR, UNKNOWN),
            region: read(REGION_VAR, UNKNOWN),
            deployment_mode,
        }
    }
}
