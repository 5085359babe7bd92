use serde::Deserialize;
use std::time::Duration;

/// Endpoints and timeouts used by the checks.
///
/// Every field has a default, so an absent settings file and an empty one
/// behave identically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeSettings {
    #[serde(default)]
    pub network: NetworkSettings,

    #[serde(default)]
    pub api: ApiSettings,

    /// Fallback run values for local invocations. Environment variables win.
    #[serde(default)]
    pub run: RunDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSettings {
    /// Hostname resolved by the DNS probe.
    #[serde(default = "default_probe_host")]
    pub probe_host: String,
    #[serde(default = "default_probe_port")]
    pub probe_port: u16,
    /// Health endpoint fetched by the HTTP probe.
    #[serde(default = "default_health_url")]
    pub health_url: String,
    #[serde(default = "default_network_timeout_secs")]
    pub timeout_secs: u64,
}

impl NetworkSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            probe_host: default_probe_host(),
            probe_port: default_probe_port(),
            health_url: default_health_url(),
            timeout_secs: default_network_timeout_secs(),
        }
    }
}

fn default_probe_host() -> String {
    "api.pennsieve.net".into()
}

fn default_probe_port() -> u16 {
    443
}

fn default_health_url() -> String {
    "https://api.pennsieve.net/health".into()
}

fn default_network_timeout_secs() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Authenticated identity endpoint, relative to the API host.
    #[serde(default = "default_user_path")]
    pub user_path: String,
    /// Public identity-provider configuration, relative to the API host.
    #[serde(default = "default_identity_config_path")]
    pub identity_config_path: String,
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_identity_timeout_secs")]
    pub identity_timeout_secs: u64,
    /// Overrides the regional token endpoint derived from the provider config.
    #[serde(default)]
    pub identity_endpoint: Option<String>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn identity_timeout(&self) -> Duration {
        Duration::from_secs(self.identity_timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            user_path: default_user_path(),
            identity_config_path: default_identity_config_path(),
            timeout_secs: default_api_timeout_secs(),
            identity_timeout_secs: default_identity_timeout_secs(),
            identity_endpoint: None,
        }
    }
}

fn default_user_path() -> String {
    "/user".into()
}

fn default_identity_config_path() -> String {
    "/authentication/cognito-config".into()
}

fn default_api_timeout_secs() -> u64 {
    10
}

fn default_identity_timeout_secs() -> u64 {
    15
}

/// Optional fallbacks for [`super::RunConfiguration`] fields, keyed by the
/// same names as the environment variables they stand in for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RunDefaults {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
    pub integration_id: Option<String>,
    #[serde(rename = "PENNSIEVE_API_HOST")]
    pub api_host: Option<String>,
    #[serde(rename = "PENNSIEVE_API_HOST2")]
    pub api_host2: Option<String>,
    pub environment: Option<String>,
    pub region: Option<String>,
    pub deployment_mode: Option<String>,
}

impl RunDefaults {
    /// Fallback for an environment key, if the settings file supplied one.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "INPUT_DIR" => &self.input_dir,
            "OUTPUT_DIR" => &self.output_dir,
            "INTEGRATION_ID" => &self.integration_id,
            "PENNSIEVE_API_HOST" => &self.api_host,
            "PENNSIEVE_API_HOST2" => &self.api_host2,
            "ENVIRONMENT" => &self.environment,
            "REGION" => &self.region,
            "DEPLOYMENT_MODE" => &self.deployment_mode,
            _ => return None,
        };
        value.as_deref()
    }
}
