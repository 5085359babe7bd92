#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod runtime;
pub mod security;
pub mod transport;

pub use app::{ProbeRunner, RunSummary};
pub use config::{ProbeSettings, RunConfiguration};
pub use error::{ProbeError, Result};
