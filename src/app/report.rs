use super::runner::RunSummary;
use crate::diagnostics::CheckStatus;

pub(crate) fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let rule = "=".repeat(60);
    let network = &summary.network;

    vec![
        rule.clone(),
        "=== SUMMARY ===".to_string(),
        format!("  Deployment mode: {}", summary.deployment_mode),
        format!(
            "  Environment vars present: {}/{}",
            summary.env.present, summary.env.total
        ),
        format!(
            "  INPUT_DIR accessible: {}",
            summary.directories.input_accessible
        ),
        format!("  OUTPUT_DIR writable: {}", summary.directories.output_writable),
        format!("  DNS resolution: {}", network.dns_ok),
        format!("  HTTP connectivity: {}", network.http_ok),
        format!(
            "  Internet validation: {}",
            CheckStatus::from_ok(network.policy_valid)
        ),
        format!("  Authenticated API: {}", summary.api),
        format!("  Symlinks created: {}", summary.symlinks.len()),
        format!("  Elapsed: {:.2}s", summary.elapsed.as_secs_f64()),
        rule,
    ]
}
