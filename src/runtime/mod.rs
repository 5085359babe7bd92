pub mod deployment;
pub mod execution;
pub mod run_id;

pub use deployment::DeploymentMode;
pub use execution::{ExecutionMode, SERVERLESS_MARKER_VAR};
pub use run_id::RunId;
