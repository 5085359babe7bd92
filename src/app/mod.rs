pub mod dispatch;
pub mod invoke;
mod report;
pub mod runner;

pub use dispatch::dispatch;
pub use invoke::{InvocationPayload, InvocationResponse, handle_invocation};
pub use runner::{FatalCondition, ProbeRunner, RunSummary};
