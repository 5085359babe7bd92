use super::CheckStatus;
use crate::config::RunConfiguration;
use tracing::info;

/// Outcome of the environment-variable presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvReport {
    pub present: usize,
    pub total: usize,
}

/// Log every configured field as PASS or WARN. Never fatal.
pub fn check_env_vars(config: &RunConfiguration) -> EnvReport {
    info!("=== TEST: Environment Variables ===");

    let fields = config.fields();
    let mut report = EnvReport {
        present: 0,
        total: fields.len(),
    };
    for field in &fields {
        let status = if field.present {
            report.present += 1;
            CheckStatus::Pass
        } else {
            CheckStatus::Warn
        };
        info!(
            status = %status,
            field = field.name,
            value = %field.display,
            "  {status}: {} = {}",
            field.name,
            field.display
        );
    }
    report
}
