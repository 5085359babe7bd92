//! Network reachability probe and deployment-mode cross-check.
//!
//! Both raw probes always run, even when no deployment mode is configured, so
//! the log shows what the node can actually reach. The mode only decides
//! whether the observation is asserted.

use crate::config::{NetworkSettings, RunConfiguration};
use crate::runtime::{DeploymentMode, ExecutionMode};
use reqwest::Client;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, info};

/// Outcome of the reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkReport {
    pub dns_ok: bool,
    pub http_ok: bool,
    /// `None` when no deployment mode is configured.
    pub expected_internet: Option<bool>,
    /// `false` only when a configured mode disagrees with the observation.
    pub policy_valid: bool,
}

impl NetworkReport {
    pub fn internet_available(&self) -> bool {
        self.dns_ok && self.http_ok
    }
}

/// Whether observed reachability satisfies the mode's expectation.
pub fn policy_matches(expected: Option<bool>, internet_available: bool) -> bool {
    expected.is_none_or(|expected| expected == internet_available)
}

pub async fn check_network(
    config: &RunConfiguration,
    execution: ExecutionMode,
    settings: &NetworkSettings,
    client: &Client,
) -> NetworkReport {
    info!("=== TEST: Internet Access ===");

    let mode = &config.deployment_mode;
    let expected_internet = mode.expects_internet(execution);
    info!(mode = %mode, "  Deployment mode: {mode}");
    info!(runtime = %execution, "  Runtime: {execution}");
    if let Some(expected) = expected_internet {
        info!(expected, "  Internet expected: {expected}");
    }

    let dns_ok = resolve(&settings.probe_host, settings.probe_port, settings.timeout()).await;
    let http_ok = fetch_health(client, &settings.health_url, settings.timeout()).await;

    let internet_available = dns_ok && http_ok;
    info!(internet_available, "  Internet available: {internet_available}");

    let policy_valid = policy_matches(expected_internet, internet_available);
    if mode.is_set() {
        log_validation(mode, expected_internet, internet_available, policy_valid);
    }

    NetworkReport {
        dns_ok,
        http_ok,
        expected_internet,
        policy_valid,
    }
}

fn log_validation(
    mode: &DeploymentMode,
    expected: Option<bool>,
    internet_available: bool,
    policy_valid: bool,
) {
    if policy_valid {
        info!(mode = %mode, "  VALIDATION PASSED: internet access matches {mode} mode expectation");
    } else if expected == Some(true) && !internet_available {
        error!(mode = %mode, "  VALIDATION FAILED: {mode} mode expects internet but connectivity test failed");
    } else {
        error!(mode = %mode, "  VALIDATION FAILED: {mode} mode should NOT have internet but connectivity test passed");
    }
}

/// Resolve `host:port`, bounded by `timeout`.
pub async fn resolve(host: &str, port: u16, timeout: Duration) -> bool {
    let lookup = tokio::net::lookup_host((host, port));
    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(addrs)) => {
            let addrs: Vec<SocketAddr> = addrs.collect();
            match addrs.iter().find(|a| a.is_ipv4()).or_else(|| addrs.first()) {
                Some(addr) => {
                    info!(host, addr = %addr.ip(), "  DNS resolution: PASS ({host} -> {})", addr.ip());
                    true
                }
                None => {
                    info!(host, "  DNS resolution: FAIL (no addresses for {host})");
                    false
                }
            }
        }
        Ok(Err(e)) => {
            info!(host, error = %e, "  DNS resolution: FAIL ({e})");
            false
        }
        Err(_) => {
            info!(host, "  DNS resolution: FAIL (timed out after {}s)", timeout.as_secs());
            false
        }
    }
}

/// GET the health endpoint. Any response below 500 counts as reachable.
pub async fn fetch_health(client: &Client, url: &str, timeout: Duration) -> bool {
    match client.get(url).timeout(timeout).send().await {
        Ok(resp) => {
            let status = resp.status();
            let ok = !status.is_server_error();
            if ok {
                info!(status = status.as_u16(), "  HTTP request: PASS (status {})", status.as_u16());
            } else {
                info!(status = status.as_u16(), "  HTTP request: FAIL (status {})", status.as_u16());
            }
            ok
        }
        Err(e) => {
            info!(url, error = %e, "  HTTP request: FAIL ({e})");
            false
        }
    }
}
