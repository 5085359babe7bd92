pub mod schema;

pub use schema::{
    ApiSettings, ConfigField, NetworkSettings, ProbeSettings, RunConfiguration, RunDefaults,
};
