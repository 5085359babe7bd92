mod env_overrides;
mod loader;
mod run;
mod settings;
#[cfg(test)]
pub(crate) mod test_env;

pub use run::{
    API_HOST_VAR, API_HOST2_VAR, ConfigField, DEPLOYMENT_MODE_VAR, ENVIRONMENT_VAR,
    INPUT_DIR_VAR, INTEGRATION_ID_VAR, OUTPUT_DIR_VAR, REFRESH_TOKEN_VAR, REGION_VAR,
    RunConfiguration, SESSION_TOKEN_VAR, UNKNOWN,
};
pub use settings::{ApiSettings, NetworkSettings, ProbeSettings, RunDefaults};
